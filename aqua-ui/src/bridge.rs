//! Bridge between the egui event loop and the tokio runtime.
//!
//! Identity calls run as spawned tasks; outcomes come back over a plain mpsc
//! channel that `update()` drains each frame. Every send requests a repaint
//! so results are applied promptly. Messages carry the generation of the
//! reset form that started them; a disposed form's generation no longer
//! matches and the late result is dropped — in-flight requests are never
//! cancelled.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::Duration;

use tokio::runtime::Handle;
use tracing::debug;

use aqua_core::{IdentityError, IdentityService};

/// Delay between a successful password update and the redirect home.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Outcomes delivered back to the UI thread.
#[derive(Debug)]
pub enum UiMsg {
    ResetFinished {
        generation: u64,
        result: Result<(), IdentityError>,
    },
    UpdateFinished {
        generation: u64,
        result: Result<(), IdentityError>,
    },
    RedirectHome {
        generation: u64,
    },
}

pub struct Bridge {
    handle: Handle,
    ctx: egui::Context,
    tx: Sender<UiMsg>,
    rx: Receiver<UiMsg>,
}

impl Bridge {
    pub fn new(handle: Handle, ctx: egui::Context) -> Self {
        let (tx, rx) = channel();
        Self {
            handle,
            ctx,
            tx,
            rx,
        }
    }

    /// Takes every message that has arrived since the last frame.
    pub fn drain(&self) -> Vec<UiMsg> {
        self.rx.try_iter().collect()
    }

    pub fn spawn_reset(&self, service: Arc<dyn IdentityService>, email: String, generation: u64) {
        let tx = self.tx.clone();
        let ctx = self.ctx.clone();
        self.handle.spawn(async move {
            let result = service.reset_password(&email).await;
            debug!(generation, ok = result.is_ok(), "reset request finished");
            let _ = tx.send(UiMsg::ResetFinished { generation, result });
            ctx.request_repaint();
        });
    }

    pub fn spawn_update(
        &self,
        service: Arc<dyn IdentityService>,
        new_password: String,
        generation: u64,
    ) {
        let tx = self.tx.clone();
        let ctx = self.ctx.clone();
        self.handle.spawn(async move {
            let result = service.update_password(&new_password).await;
            debug!(generation, ok = result.is_ok(), "password update finished");
            let _ = tx.send(UiMsg::UpdateFinished { generation, result });
            ctx.request_repaint();
        });
    }

    /// Fires the one-shot redirect timer.
    pub fn schedule_redirect(&self, generation: u64) {
        let tx = self.tx.clone();
        let ctx = self.ctx.clone();
        self.handle
            .spawn(redirect_after(REDIRECT_DELAY, generation, tx, ctx));
    }
}

async fn redirect_after(delay: Duration, generation: u64, tx: Sender<UiMsg>, ctx: egui::Context) {
    tokio::time::sleep(delay).await;
    let _ = tx.send(UiMsg::RedirectHome { generation });
    ctx.request_repaint();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn redirect_fires_once_after_the_delay() {
        let (tx, rx) = channel();
        let ctx = egui::Context::default();
        let task = tokio::spawn(redirect_after(REDIRECT_DELAY, 7, tx, ctx));

        // Just before the deadline nothing has arrived.
        tokio::time::sleep(REDIRECT_DELAY - Duration::from_millis(1)).await;
        assert!(rx.try_recv().is_err());

        task.await.unwrap();
        match rx.try_recv() {
            Ok(UiMsg::RedirectHome { generation }) => assert_eq!(generation, 7),
            other => panic!("expected RedirectHome, got {other:?}"),
        }
        // Exactly once.
        assert!(rx.try_recv().is_err());
    }
}
