use std::sync::Arc;

use axum::{
    Router,
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::Response,
    routing::get,
};
use futures_util::{SinkExt, StreamExt};

use super::hub::RelayHub;

pub fn relay_router(hub: Arc<RelayHub>) -> Router {
    Router::new()
        .route("/", get(relay_upgrade))
        .route("/ws", get(relay_upgrade))
        .with_state(hub)
}

async fn relay_upgrade(ws: WebSocketUpgrade, State(hub): State<Arc<RelayHub>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, hub))
}

pub async fn handle_socket(socket: WebSocket, hub: Arc<RelayHub>) {
    let (peer_id, mut outbox) = hub.register().await;
    tracing::info!(
        "新的中继连接 peer={} 当前连接数={}",
        peer_id,
        hub.peer_count().await
    );

    let (mut sink, mut stream) = socket.split();

    // 写任务：把广播帧推给本连接，发送失败即放弃
    let writer = tokio::spawn(async move {
        while let Some(frame) = outbox.recv().await {
            if sink.send(Message::Text(frame.into())).await.is_err() {
                break;
            }
        }
    });

    while let Some(msg) = stream.next().await {
        let text = match msg {
            Ok(Message::Text(text)) => text.as_str().to_owned(),
            Ok(Message::Binary(data)) => String::from_utf8_lossy(&data).into_owned(),
            Ok(Message::Close(_)) => break,
            Ok(_) => continue,
            Err(e) => {
                tracing::debug!("中继连接读取失败 peer={}: {}", peer_id, e);
                break;
            }
        };

        tracing::debug!("收到中继消息 peer={}: {}", peer_id, text);
        hub.broadcast(peer_id, &text).await;
    }

    hub.unregister(peer_id).await;
    writer.abort();
    tracing::info!(
        "中继连接断开 peer={} 当前连接数={}",
        peer_id,
        hub.peer_count().await
    );
}
