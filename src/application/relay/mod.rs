// WebSocket 广播中继：任一连接发来的消息转发给其余所有连接

mod hub;
mod socket;

pub use hub::{PeerId, RelayHub};
pub use socket::{handle_socket, relay_router};
