/// Color models: RGB, CMYK and HLS
///
/// Companion conversions for the display colors produced by shading.
/// CMYK and HLS channels are percentages (hue in degrees); RGB is 8-bit.

pub fn clampf(value: f32, min_value: f32, max_value: f32) -> f32 {
    value.max(min_value).min(max_value)
}

/// 8-bit display color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_cmyk(&self) -> Cmyk {
        let r1 = f32::from(self.r) / 255.0;
        let g1 = f32::from(self.g) / 255.0;
        let b1 = f32::from(self.b) / 255.0;
        let k = 1.0 - r1.max(g1).max(b1);
        if k == 1.0 {
            return Cmyk {
                c: 0.0,
                m: 0.0,
                y: 0.0,
                k: 100.0,
            };
        }
        Cmyk {
            c: (1.0 - r1 - k) / (1.0 - k) * 100.0,
            m: (1.0 - g1 - k) / (1.0 - k) * 100.0,
            y: (1.0 - b1 - k) / (1.0 - k) * 100.0,
            k: k * 100.0,
        }
    }

    pub fn to_hls(&self) -> Hls {
        let r1 = f32::from(self.r) / 255.0;
        let g1 = f32::from(self.g) / 255.0;
        let b1 = f32::from(self.b) / 255.0;
        let max_v = r1.max(g1).max(b1);
        let min_v = r1.min(g1).min(b1);
        let l = (max_v + min_v) / 2.0;
        if max_v == min_v {
            return Hls {
                h: 0.0,
                l: l * 100.0,
                s: 0.0,
            };
        }

        let d = max_v - min_v;
        let s = d / (1.0 - (2.0 * l - 1.0).abs());

        let h = if max_v == r1 {
            (g1 - b1) / d + if g1 < b1 { 6.0 } else { 0.0 }
        } else if max_v == g1 {
            (b1 - r1) / d + 2.0
        } else {
            (r1 - g1) / d + 4.0
        };

        Hls {
            h: (h * 60.0).rem_euclid(360.0),
            l: l * 100.0,
            s: s * 100.0,
        }
    }
}

/// Subtractive print model, channels in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cmyk {
    pub c: f32,
    pub m: f32,
    pub y: f32,
    pub k: f32,
}

impl Cmyk {
    pub fn to_rgb(&self) -> Rgb {
        let c1 = clampf(self.c, 0.0, 100.0) / 100.0;
        let m1 = clampf(self.m, 0.0, 100.0) / 100.0;
        let y1 = clampf(self.y, 0.0, 100.0) / 100.0;
        let k1 = clampf(self.k, 0.0, 100.0) / 100.0;
        Rgb {
            r: (255.0 * (1.0 - c1) * (1.0 - k1)).round() as u8,
            g: (255.0 * (1.0 - m1) * (1.0 - k1)).round() as u8,
            b: (255.0 * (1.0 - y1) * (1.0 - k1)).round() as u8,
        }
    }
}

/// Hue (degrees), lightness and saturation (percent)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hls {
    pub h: f32,
    pub l: f32,
    pub s: f32,
}

impl Hls {
    pub fn to_rgb(&self) -> Rgb {
        let h1 = self.h.rem_euclid(360.0) / 360.0;
        let l1 = clampf(self.l, 0.0, 100.0) / 100.0;
        let s1 = clampf(self.s, 0.0, 100.0) / 100.0;
        if s1 == 0.0 {
            let val = (l1 * 255.0).round() as u8;
            return Rgb::new(val, val, val);
        }

        let q = if l1 < 0.5 {
            l1 * (1.0 + s1)
        } else {
            l1 + s1 - l1 * s1
        };
        let p = 2.0 * l1 - q;
        Rgb {
            r: (hue_to_rgb(p, q, h1 + 1.0 / 3.0) * 255.0).round() as u8,
            g: (hue_to_rgb(p, q, h1) * 255.0).round() as u8,
            b: (hue_to_rgb(p, q, h1 - 1.0 / 3.0) * 255.0).round() as u8,
        }
    }
}

fn hue_to_rgb(p: f32, q: f32, t: f32) -> f32 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_format() {
        assert_eq!(Rgb::new(127, 86, 217).to_hex(), "#7F56D9");
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
    }

    #[test]
    fn test_black_maps_to_full_key() {
        let cmyk = Rgb::new(0, 0, 0).to_cmyk();
        assert_eq!(cmyk, Cmyk { c: 0.0, m: 0.0, y: 0.0, k: 100.0 });
        assert_eq!(cmyk.to_rgb(), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_primary_through_cmyk() {
        let cmyk = Rgb::new(255, 0, 0).to_cmyk();
        assert!(cmyk.c.abs() < 1e-4);
        assert!((cmyk.m - 100.0).abs() < 1e-4);
        assert!((cmyk.y - 100.0).abs() < 1e-4);
        assert!(cmyk.k.abs() < 1e-4);
        assert_eq!(cmyk.to_rgb(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_red_hls() {
        let hls = Rgb::new(255, 0, 0).to_hls();
        assert!(hls.h.abs() < 1e-4);
        assert!((hls.l - 50.0).abs() < 0.1);
        assert!((hls.s - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_achromatic_has_zero_saturation() {
        let hls = Rgb::new(96, 96, 96).to_hls();
        assert_eq!(hls.h, 0.0);
        assert_eq!(hls.s, 0.0);
    }

    #[test]
    fn test_green_from_hls() {
        let rgb = Hls { h: 120.0, l: 50.0, s: 100.0 }.to_rgb();
        assert_eq!(rgb, Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_hue_wraps() {
        let a = Hls { h: 480.0, l: 50.0, s: 100.0 }.to_rgb();
        let b = Hls { h: 120.0, l: 50.0, s: 100.0 }.to_rgb();
        assert_eq!(a, b);
    }
}
