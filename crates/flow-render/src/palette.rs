use crate::canvas::Rgba;

pub const GRID: Rgba = Rgba::rgb(200, 200, 200);
pub const AXIS: Rgba = Rgba::rgb(0, 0, 0);
pub const TEXT: Rgba = Rgba::rgb(0, 0, 0);
pub const BAND_FILL: Rgba = Rgba(100, 150, 255, 50);
pub const BAND_EDGE: Rgba = Rgba::rgb(255, 100, 100);
pub const MEDIAN: Rgba = Rgba::rgb(50, 150, 50);
pub const CURSOR: Rgba = Rgba::rgb(128, 128, 128);
pub const ECO: Rgba = Rgba::rgb(0, 200, 0);
pub const NORMAL: Rgba = Rgba::rgb(255, 150, 0);
pub const TRANSPARENT: Rgba = Rgba(0, 0, 0, 0);

pub fn marker_fill(is_eco: bool) -> Rgba {
    if is_eco {
        ECO
    } else {
        NORMAL
    }
}
