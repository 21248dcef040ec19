// 长连接应用
pub mod relay;
