use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::warn;

use crate::error::Result;

/// Natural pixel dimensions of an SVG source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgDimensions {
    pub width: u32,
    pub height: u32,
}

/// ViewBox widths above this are scaled down so the derived width lands here.
const MAX_VIEWBOX_WIDTH: f64 = 1000.0;

/// Strip common unit suffixes and parse a length attribute.
fn parse_length(value: &str) -> Option<f64> {
    let trimmed = value
        .trim()
        .trim_end_matches("px")
        .trim_end_matches("pt")
        .trim();
    trimmed.parse::<f64>().ok().filter(|v| *v > 0.0)
}

/// Derive dimensions from a `viewBox="x y width height"` attribute,
/// downscaling very wide boxes to a reasonable pixel size.
fn dimensions_from_viewbox(viewbox: &str) -> Option<SvgDimensions> {
    let parts: Vec<&str> = viewbox.split_whitespace().collect();
    if parts.len() < 4 {
        return None;
    }
    let vb_width = parts[2].parse::<f64>().ok().filter(|v| *v > 0.0)?;
    let vb_height = parts[3].parse::<f64>().ok().filter(|v| *v > 0.0)?;

    let scale = if vb_width > MAX_VIEWBOX_WIDTH {
        MAX_VIEWBOX_WIDTH / vb_width
    } else {
        1.0
    };
    Some(SvgDimensions {
        width: (vb_width * scale) as u32,
        height: (vb_height * scale) as u32,
    })
}

/// Extract the natural dimensions from SVG markup: explicit `width`/`height`
/// attributes on the root element win, `viewBox` is the fallback. Returns
/// `None` when neither is present or parseable.
pub fn dimensions_from_str(content: &str) -> Result<Option<SvgDimensions>> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"svg" => {
                let mut width = None;
                let mut height = None;
                let mut viewbox = None;

                for attr in e.attributes().flatten() {
                    let value = attr.unescape_value()?;
                    match attr.key.as_ref() {
                        b"width" => width = parse_length(&value),
                        b"height" => height = parse_length(&value),
                        b"viewBox" => viewbox = Some(value.into_owned()),
                        _ => {}
                    }
                }

                if let (Some(w), Some(h)) = (width, height) {
                    return Ok(Some(SvgDimensions {
                        width: w as u32,
                        height: h as u32,
                    }));
                }
                return Ok(viewbox.as_deref().and_then(dimensions_from_viewbox));
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

/// Read an SVG file and extract its natural dimensions.
pub fn extract_dimensions(path: &Path) -> Result<Option<SvgDimensions>> {
    let content = std::fs::read_to_string(path)?;
    let dims = dimensions_from_str(&content)?;
    if dims.is_none() {
        warn!("Could not determine dimensions for {:?}", path);
    }
    Ok(dims)
}
