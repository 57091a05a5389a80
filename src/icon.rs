// SPDX-License-Identifier: MPL-2.0
//! Window icon, rasterized at runtime from the embedded branding SVG.

use iced::window::{icon, Icon};
use resvg::usvg;

/// Edge length of the rasterized icon in pixels.
pub const ICON_SIZE: u32 = 128;

const SVG_SOURCE: &str = include_str!("../assets/branding/scene_montage.svg");

/// Renders the branding SVG to an RGBA pixmap of [`ICON_SIZE`] squared.
fn rasterize(svg: &[u8], size: u32) -> Option<tiny_skia::Pixmap> {
    let tree = match usvg::Tree::from_data(svg, &usvg::Options::default()) {
        Ok(tree) => tree,
        Err(err) => {
            tracing::warn!(error = %err, "cannot parse window icon");
            return None;
        }
    };

    let original = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        size as f32 / original.width(),
        size as f32 / original.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Some(pixmap)
}

/// Returns `None` if parsing or rendering fails; the window then uses the
/// platform default icon.
pub fn load_window_icon() -> Option<Icon> {
    let pixmap = rasterize(SVG_SOURCE.as_bytes(), ICON_SIZE)?;
    icon::from_rgba(pixmap.data().to_vec(), ICON_SIZE, ICON_SIZE).ok()
}
