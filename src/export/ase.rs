//! Adobe Swatch Exchange (ASE) encoder.
//!
//! All integers are big-endian:
//!
//! ```text
//! "ASEF" | version u32 0x00010000 | block count u16
//! per color:
//!   block type u16 0x0001 | block length u32
//!   name length u16 (UTF-16 units) | name UTF-16BE, no terminator
//!   "RGB " | r f32 | g f32 | b f32 | color type u16 0x0002 (normal)
//! ```

use crate::error::ColorError;
use crate::models::Color;

const SIGNATURE: &[u8; 4] = b"ASEF";
const VERSION: u32 = 0x0001_0000;
const BLOCK_COLOR_ENTRY: u16 = 0x0001;
const MODEL_RGB: &[u8; 4] = b"RGB ";
const COLOR_TYPE_NORMAL: u16 = 0x0002;

/// Bytes in a color block after the length field, excluding the name.
const FIXED_BLOCK_LEN: usize = 2 + 4 + 12 + 2;

/// Encode one color entry per color, named `{palette_name}-{i}` from 1.
///
/// The block count is a `u16` and so is each name length, so more than
/// 65535 colors or a name longer than 65535 UTF-16 units is an error.
pub fn encode_ase(colors: &[Color], palette_name: &str) -> Result<Vec<u8>, ColorError> {
    let count = u16::try_from(colors.len()).map_err(|_| {
        tracing::warn!(colors = colors.len(), "Too many colors for an ASE file");
        ColorError::AseLimit(format!("{} colors (max {})", colors.len(), u16::MAX))
    })?;
    let mut buf = Vec::with_capacity(10 + colors.len() * 64);

    buf.extend_from_slice(SIGNATURE);
    buf.extend_from_slice(&VERSION.to_be_bytes());
    buf.extend_from_slice(&count.to_be_bytes());

    for (i, color) in colors.iter().enumerate() {
        let name = format!("{palette_name}-{}", i + 1);
        write_color_block(&mut buf, &name, color)?;
    }

    Ok(buf)
}

fn write_color_block(buf: &mut Vec<u8>, name: &str, color: &Color) -> Result<(), ColorError> {
    let units: Vec<u16> = name.encode_utf16().collect();
    let name_len = u16::try_from(units.len()).map_err(|_| {
        tracing::warn!(units = units.len(), "Swatch name too long for an ASE file");
        ColorError::AseLimit(format!(
            "name of {} UTF-16 units (max {})",
            units.len(),
            u16::MAX
        ))
    })?;
    let block_len = FIXED_BLOCK_LEN as u32 + 2 * u32::from(name_len);

    buf.extend_from_slice(&BLOCK_COLOR_ENTRY.to_be_bytes());
    buf.extend_from_slice(&block_len.to_be_bytes());
    buf.extend_from_slice(&name_len.to_be_bytes());
    for unit in units {
        buf.extend_from_slice(&unit.to_be_bytes());
    }

    buf.extend_from_slice(MODEL_RGB);
    for channel in color.to_rgb().to_bytes() {
        let value = f32::from(channel) / 255.0;
        buf.extend_from_slice(&value.to_be_bytes());
    }
    buf.extend_from_slice(&COLOR_TYPE_NORMAL.to_be_bytes());
    Ok(())
}
