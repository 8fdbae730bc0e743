//! Headless walkthrough of an edit session, driven by scripted prompts.
//!
//! Run with `cargo run --example edit_session_demo`.

use std::io::Cursor;

use snapedit_core::Channel;
use snapedit_desktop::{EditSession, ScriptedPrompt, SessionError};

fn main() -> Result<(), SessionError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut session = EditSession::new();

    // Synthesize a 320x240 gradient instead of opening a file dialog
    let img = image::RgbImage::from_fn(320, 240, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let mut png = Cursor::new(Vec::new());
    img.write_to(&mut png, image::ImageFormat::Png)
        .expect("in-memory PNG encode");

    session.load_from_bytes(&png.into_inner())?;
    log_current(&session, "loaded");

    let mut prompt = ScriptedPrompt::answering([40, 30, 280, 210]);
    session.crop_prompted(&mut prompt)?;
    log_current(&session, "cropped");

    let mut prompt = ScriptedPrompt::answering([10]);
    session.add_border_prompted(&mut prompt)?;
    log_current(&session, "bordered");

    let mut prompt = ScriptedPrompt::answering([0, 0, 259, 199, 3]);
    session.draw_line_prompted(&mut prompt)?;
    log_current(&session, "line drawn");

    let view = session.channel_preview(Channel::Green)?;
    log::info!("green channel view: {}x{}", view.width, view.height);

    let (source_x, source_y) = session.pointer_to_source(120.0, 80.0)?;
    log::info!("pointer (120, 80) maps to source ({source_x}, {source_y})");

    Ok(())
}

fn log_current(session: &EditSession, step: &str) {
    if let Some(img) = session.image() {
        let fit = session.display_fit().expect("fit follows image");
        log::info!(
            "{step}: {}x{} (display scale {:.3})",
            img.width,
            img.height,
            fit.scale
        );
    }
}
