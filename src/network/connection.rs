//! Connection to the IRC server and the event loop.
//!
//! One connection, one task: lines are read, decoded into events and
//! routed one at a time, and the resulting commands are written before the
//! next line is read.

use super::codec::ServerLineCodec;
use super::stream::ServerStream;
use super::tls::upgrade_to_tls;
use crate::config::{IdentityConfig, ServerConfig};
use crate::error::TransportError;
use crate::event::Event;
use crate::proto::{Command, Message};
use crate::router::Router;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_util::codec::Framed;
use tracing::{debug, info, trace};

/// A registered-or-registering connection to the server.
pub struct Connection {
    framed: Framed<ServerStream, ServerLineCodec>,
}

impl Connection {
    /// Open the TCP connection and wrap it in TLS if configured.
    pub async fn connect(server: &ServerConfig) -> Result<Self, TransportError> {
        let tcp = TcpStream::connect(&server.address).await?;
        let stream = if server.tls {
            let tls = upgrade_to_tls(tcp, server.hostname(), !server.tls_skip_verify).await?;
            ServerStream::Tls(Box::new(tls))
        } else {
            ServerStream::Plain(tcp)
        };
        info!(address = %server.address, tls = stream.is_tls(), "Connected");

        Ok(Self {
            framed: Framed::new(stream, ServerLineCodec::new()),
        })
    }

    /// Write one command.
    pub async fn send(&mut self, command: &Command) -> Result<(), TransportError> {
        trace!(line = %command, "->");
        self.framed.send(command.to_string()).await?;
        Ok(())
    }

    /// Send PASS (if any), NICK and USER. The welcome numeric arrives later
    /// through the event loop.
    pub async fn register(
        &mut self,
        identity: &IdentityConfig,
        server: &ServerConfig,
    ) -> Result<(), TransportError> {
        if let Some(password) = &server.password {
            self.send(&Command::Pass(password.clone())).await?;
        }
        self.send(&Command::Nick(identity.nick.clone())).await?;
        self.send(&Command::User(
            identity.user().to_string(),
            identity.realname.clone(),
        ))
        .await?;
        debug!(nick = %identity.nick, "Registration sent");
        Ok(())
    }

    /// Run the event loop until the server closes the connection.
    pub async fn run(&mut self, router: &mut Router) -> Result<(), TransportError> {
        while let Some(result) = self.framed.next().await {
            let line = result?;
            trace!(line = %line, "<-");

            let msg = match line.parse::<Message>() {
                Ok(msg) => msg,
                Err(e) => {
                    debug!(error = %e, line = %line, "Unparseable line");
                    continue;
                }
            };

            match msg.command.as_str() {
                "PING" => {
                    let token = msg.arg(0).unwrap_or_default().to_string();
                    self.send(&Command::Pong(token)).await?;
                    continue;
                }
                "ERROR" => {
                    let reason = msg.arg(0).unwrap_or_default().to_string();
                    return Err(TransportError::Closed(reason));
                }
                _ => {}
            }

            let Some(event) = Event::from_message(&msg) else {
                continue;
            };
            for command in router.handle(&event) {
                self.send(&command).await?;
            }
        }

        info!("Server closed the connection");
        Ok(())
    }
}
