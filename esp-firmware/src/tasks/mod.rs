// Task-Modul: Enthält alle Embassy Tasks
//
// Netzwerk-Tasks laufen unabhängig; der HTTP-Task ist der einzige, der den
// LED-Controller anfasst.

pub mod http;
pub mod wifi;

// Re-export Tasks für einfachen Import
pub use http::http_server_task;
pub use wifi::{connection_task, dhcp_task, net_task};
