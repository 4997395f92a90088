//! Network module.
//!
//! Contains the upstream Connection, its line codec, stream type and TLS setup.

mod codec;
mod connection;
mod stream;
mod tls;

pub use codec::{MAX_LINE_LENGTH, ServerLineCodec};
pub use connection::Connection;
pub use stream::ServerStream;

use crate::error::TransportError;
use crate::router::Router;
use crate::telemetry::spans;
use tracing::Instrument;

/// Connect, register and route events until the connection ends.
/// There is no reconnect: when this returns, the session is over.
pub async fn run(router: &mut Router) -> Result<(), TransportError> {
    let server = router.warden().config().server.clone();
    let identity = router.warden().config().identity.clone();
    let span = spans::connection(&server.address, &identity.nick);

    async move {
        let mut connection = Connection::connect(&server).await?;
        connection.register(&identity, &server).await?;
        connection.run(router).await
    }
    .instrument(span)
    .await
}
