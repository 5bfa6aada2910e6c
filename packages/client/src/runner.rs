//! Client connection loop.

use futures_util::{
    SinkExt, StreamExt,
    stream::{SplitSink, SplitStream},
};
use parlor_server::infrastructure::dto::{ChatMessageDto, ClientFrame, MESSAGES_TOPIC, ServerFrame};
use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::{net::TcpStream, sync::mpsc};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

use crate::{
    command::{Command, parse_input},
    config::ClientConfig,
    error::ClientError,
};

type WsSink = SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, Message>;
type WsStream = SplitStream<WebSocketStream<MaybeTlsStream<TcpStream>>>;

/// Connect, subscribe to the shared topic, and relay between the prompt and
/// the socket until the user quits or the server goes away.
pub async fn run_client(config: ClientConfig) -> Result<(), ClientError> {
    let (ws, _) = connect_async(config.url.as_str()).await?;
    let (mut sink, mut stream) = ws.split();
    tracing::info!("Connected to {}", config.url);

    // Subscribe, then ask for the recent history up front
    send_frame(
        &mut sink,
        &ClientFrame::Subscribe {
            topic: MESSAGES_TOPIC.to_string(),
        },
    )
    .await?;
    send_frame(&mut sink, &ClientFrame::History).await?;

    // rustyline is blocking; read lines on a dedicated thread
    let (line_tx, line_rx) = mpsc::unbounded_channel::<String>();
    std::thread::spawn(move || read_lines(line_tx));

    chat_loop(&config, &mut sink, &mut stream, line_rx).await?;

    sink.close().await?;
    Ok(())
}

async fn chat_loop(
    config: &ClientConfig,
    sink: &mut WsSink,
    stream: &mut WsStream,
    mut line_rx: mpsc::UnboundedReceiver<String>,
) -> Result<(), ClientError> {
    loop {
        tokio::select! {
            line = line_rx.recv() => {
                let Some(line) = line else { break };
                match parse_input(&line) {
                    Command::Say(content) => {
                        let frame = ClientFrame::Send {
                            username: config.username.clone(),
                            content,
                        };
                        send_frame(sink, &frame).await?;
                    }
                    Command::History => send_frame(sink, &ClientFrame::History).await?,
                    Command::Quit => break,
                    Command::Nothing => {}
                }
            }
            msg = stream.next() => {
                let Some(msg) = msg else {
                    tracing::info!("Server closed the connection");
                    break;
                };
                if let Message::Text(text) = msg? {
                    print_frame(&text);
                }
            }
        }
    }

    Ok(())
}

/// Blocking prompt loop. Ctrl-C and Ctrl-D leave the chat.
fn read_lines(line_tx: mpsc::UnboundedSender<String>) {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            tracing::error!("Failed to start line editor: {}", e);
            return;
        }
    };

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let _ = editor.add_history_entry(&line);
                if line_tx.send(line).is_err() {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                let _ = line_tx.send("/quit".to_string());
                break;
            }
            Err(e) => {
                tracing::error!("Readline error: {}", e);
                break;
            }
        }
    }
}

fn print_frame(text: &str) {
    match serde_json::from_str::<ServerFrame>(text) {
        Ok(ServerFrame::Message(view)) => print_message(&view),
        Ok(ServerFrame::History { messages }) => {
            // History arrives newest-first; print it chronologically
            for view in messages.iter().rev() {
                print_message(view);
            }
        }
        Err(_) => tracing::debug!("Ignoring unrecognized frame: {}", text),
    }
}

fn print_message(view: &ChatMessageDto) {
    println!("[{}] {}: {}", view.timestamp, view.username, view.content);
}

async fn send_frame(sink: &mut WsSink, frame: &ClientFrame) -> Result<(), ClientError> {
    let json = serde_json::to_string(frame)?;
    sink.send(Message::Text(json.into())).await?;
    Ok(())
}
