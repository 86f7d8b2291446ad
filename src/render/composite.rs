use crate::foundation::error::{InkError, InkResult};
use crate::foundation::math::{mul_div255_u8, opacity_to_u8};

pub type PremulRgba8 = [u8; 4];

/// Source-over of one premultiplied pixel, with `src` scaled by `opacity`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = u16::from(opacity_to_u8(opacity));
    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

pub fn over_in_place(dst: &mut [u8], src: &[u8], opacity: f32) -> InkResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(InkError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Scale every channel of `content` by the alpha of the matching `mask` pixel.
///
/// Mask color is ignored; only coverage matters.
pub fn mask_alpha_into(content: &[u8], mask: &[u8], dst: &mut [u8]) -> InkResult<()> {
    if content.len() != mask.len() || content.len() != dst.len() || !dst.len().is_multiple_of(4)
    {
        return Err(InkError::render(
            "mask_alpha_into expects equal-length rgba8 buffers",
        ));
    }
    for ((s, m), d) in content
        .chunks_exact(4)
        .zip(mask.chunks_exact(4))
        .zip(dst.chunks_exact_mut(4))
    {
        let w = u16::from(m[3]);
        d[0] = mul_div255_u8(u16::from(s[0]), w);
        d[1] = mul_div255_u8(u16::from(s[1]), w);
        d[2] = mul_div255_u8(u16::from(s[2]), w);
        d[3] = mul_div255_u8(u16::from(s[3]), w);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
