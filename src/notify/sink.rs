use std::collections::HashMap;

use async_io::block_on;
use zbus::{Connection, proxy};
use zvariant::{Structure, Value};

use super::present::{NoteImage, NotePayload};

/// Application name reported to the notification service.
const APP_NAME: &str = "cmus";

/// Errors talking to the session notification service.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification service unavailable: {0}")]
    Bus(#[from] zbus::Error),
}

/// Where rendered notifications go.
///
/// The production implementation talks to the session bus; tests substitute
/// a recording sink.
pub trait NotificationSink {
    /// Deliver a notification; `replaces_id` 0 asks the server for a fresh id.
    fn deliver(
        &mut self,
        payload: &NotePayload,
        replaces_id: u32,
        timeout_ms: i32,
    ) -> Result<u32, NotifyError>;

    /// Dismiss a previously delivered notification.
    fn dismiss(&mut self, id: u32) -> Result<(), NotifyError>;
}

#[proxy(
    interface = "org.freedesktop.Notifications",
    default_service = "org.freedesktop.Notifications",
    default_path = "/org/freedesktop/Notifications"
)]
trait Notifications {
    #[allow(clippy::too_many_arguments)]
    fn notify(
        &self,
        app_name: &str,
        replaces_id: u32,
        app_icon: &str,
        summary: &str,
        body: &str,
        actions: &[&str],
        hints: HashMap<&str, &Value<'_>>,
        expire_timeout: i32,
    ) -> zbus::Result<u32>;

    fn close_notification(&self, id: u32) -> zbus::Result<()>;
}

/// Sink backed by `org.freedesktop.Notifications` on the session bus.
pub struct SessionBusNotifier {
    connection: Connection,
}

impl SessionBusNotifier {
    /// Connect to the session bus. Failing here means the environment has no
    /// notification service to talk to at all.
    pub fn connect() -> Result<Self, NotifyError> {
        let connection = block_on(Connection::session())?;
        Ok(Self { connection })
    }
}

impl NotificationSink for SessionBusNotifier {
    fn deliver(
        &mut self,
        payload: &NotePayload,
        replaces_id: u32,
        timeout_ms: i32,
    ) -> Result<u32, NotifyError> {
        block_on(async {
            let proxy = NotificationsProxy::new(&self.connection).await?;

            let (hint_key, image_value) = image_hint(&payload.image);
            let mut hints: HashMap<&str, &Value<'_>> = HashMap::new();
            hints.insert(hint_key, &image_value);

            let id = proxy
                .notify(
                    APP_NAME,
                    replaces_id,
                    &payload.app_icon,
                    &payload.summary,
                    &payload.body,
                    &[],
                    hints,
                    timeout_ms,
                )
                .await?;
            Ok(id)
        })
    }

    fn dismiss(&mut self, id: u32) -> Result<(), NotifyError> {
        block_on(async {
            let proxy = NotificationsProxy::new(&self.connection).await?;
            proxy.close_notification(id).await?;
            Ok(())
        })
    }
}

/// Map the image payload onto the protocol's image hints.
fn image_hint(image: &NoteImage) -> (&'static str, Value<'static>) {
    match image {
        NoteImage::Icon(name) => ("image-path", Value::from(name.clone())),
        NoteImage::Raw {
            width,
            height,
            rowstride,
            data,
        } => (
            "image-data",
            // (width, height, rowstride, has_alpha, bits_per_sample,
            //  channels, data), the iiibiiay layout the hint expects.
            Value::from(Structure::from((
                *width,
                *height,
                *rowstride,
                true,
                8i32,
                4i32,
                data.clone(),
            ))),
        ),
    }
}
