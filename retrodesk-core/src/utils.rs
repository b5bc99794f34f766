pub mod command_pipe;
pub mod state_socket;
