use crate::foundation::core::Rgba8Premul;

/// Porter-Duff source-over on premultiplied pixels: `src + dst * (1 - src.a)`.
pub fn over(dst: Rgba8Premul, src: Rgba8Premul) -> Rgba8Premul {
    if src.a == 0 {
        return dst;
    }
    if src.a == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src.a);
    Rgba8Premul {
        r: add_sat_u8(src.r, mul_div255(u16::from(dst.r), inv)),
        g: add_sat_u8(src.g, mul_div255(u16::from(dst.g), inv)),
        b: add_sat_u8(src.b, mul_div255(u16::from(dst.b), inv)),
        a: add_sat_u8(src.a, mul_div255(u16::from(dst.a), inv)),
    }
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}
