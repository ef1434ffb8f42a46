//! Preview a sound on the default output device

use crate::error::{CliError, Result};
use soundcn_audio_desktop::CpalOutput;
use soundcn_playback::{
    AssetLoader, AssetSource, PlaybackContext, PlaybackSession, SessionEvent, SessionState,
    VoiceParams,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// How often natural ends are collected from the output
const PUMP_INTERVAL: Duration = Duration::from_millis(20);

/// Play `name` through the desktop output and wait for it to end
///
/// Ctrl-C stops playback early.
pub async fn play(source: Arc<dyn AssetSource>, name: &str, params: VoiceParams) -> Result<()> {
    let context = PlaybackContext::new(CpalOutput::open_default);
    play_until(context, source, name, params, tokio::signal::ctrl_c()).await
}

/// Play `name` on `context` until it ends or `interrupt` completes
pub async fn play_until<F, T>(
    context: PlaybackContext,
    source: Arc<dyn AssetSource>,
    name: &str,
    params: VoiceParams,
    interrupt: F,
) -> Result<()>
where
    F: Future<Output = T>,
{
    let loader = Arc::new(AssetLoader::new(source));
    let session = PlaybackSession::with_params(context.clone(), loader, params);
    let events = session.subscribe();

    session.start(name).await;

    tokio::pin!(interrupt);
    let mut ticker = tokio::time::interval(PUMP_INTERVAL);

    loop {
        for event in events.try_iter() {
            match event {
                SessionEvent::Failed { name, message } => {
                    return Err(CliError::PlaybackFailed { name, message });
                }
                SessionEvent::Ended { name } => {
                    tracing::debug!("Finished playing {}", name);
                    session.dispose();
                    return Ok(());
                }
                SessionEvent::StateChanged { state } => {
                    tracing::debug!("Playback state: {:?}", state);
                }
            }
        }

        if session.state() == SessionState::Idle {
            return Ok(());
        }

        tokio::select! {
            _ = &mut interrupt => {
                tracing::info!("Stopping {}", name);
                session.dispose();
                return Ok(());
            }
            _ = ticker.tick() => {
                context.pump();
            }
        }
    }
}
