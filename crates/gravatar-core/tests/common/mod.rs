pub mod avatar_server;
