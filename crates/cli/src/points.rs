use anyhow::{bail, Context, Result};
use std::fmt;

/// Point type used by the CLI; plain `f64` fields.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pt {
    pub x: f64,
    pub y: f64,
}
convexkit::impl_point_access!(Pt: f64, fields x, y);

impl fmt::Display for Pt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Parse a single `x,y` token.
pub fn parse_point(token: &str) -> Result<Pt> {
    let Some((x, y)) = token.split_once(',') else {
        bail!("point `{token}` must be written as x,y");
    };
    let x: f64 = x
        .trim()
        .parse()
        .with_context(|| format!("bad x coordinate in `{token}`"))?;
    let y: f64 = y
        .trim()
        .parse()
        .with_context(|| format!("bad y coordinate in `{token}`"))?;
    if !(x.is_finite() && y.is_finite()) {
        bail!("point `{token}` has non-finite coordinates");
    }
    Ok(Pt { x, y })
}

/// Parse whitespace-separated `x,y` tokens.
pub fn parse_points(list: &str) -> Result<Vec<Pt>> {
    list.split_whitespace()
        .enumerate()
        .map(|(i, tok)| parse_point(tok).with_context(|| format!("point #{i}")))
        .collect()
}

/// One vertex per line, `x y`.
pub fn print_polygon(poly: &[Pt]) {
    for p in poly {
        println!("{p}");
    }
}
