/// Segment scene text format parser
///
/// A scene is whitespace-delimited: a segment count, then one
/// `x0 y0 x1 y1` quadruple per segment, then a final
/// `xmin ymin xmax ymax` clip window:
///
/// ```text
/// 2
/// 0 0 18 12
/// 3 15 16 -1
/// 2 2 14 10
/// ```
use nom::{
    character::complete::{digit1, multispace0, multispace1},
    combinator::map_res,
    multi::many1,
    number::complete::float,
    IResult,
};
use thiserror::Error;

use crate::clip::{ClipRect, Segment};

/// Segments plus the clip window they are tested against
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentScene {
    pub segments: Vec<Segment>,
    pub clip: ClipRect,
}

#[derive(Debug, Error)]
pub enum SegFileError {
    #[error("malformed segment scene: {0}")]
    Syntax(String),
    #[error("scene declares {declared} segments but contains {found}")]
    CountMismatch { declared: usize, found: usize },
    #[error("trailing data after the clip window")]
    TrailingData,
}

/// Parse a segment scene, validating the declared count against the
/// actual number of quadruples. Core clipping routines only ever see the
/// validated output.
pub fn parse_scene(input: &str) -> Result<SegmentScene, SegFileError> {
    let (rest, (declared, quads)) =
        parse_scene_impl(input).map_err(|e| SegFileError::Syntax(format!("{:?}", e)))?;
    if !rest.trim().is_empty() {
        return Err(SegFileError::TrailingData);
    }
    // The final quadruple is the clip window.
    if quads.len() != declared + 1 {
        return Err(SegFileError::CountMismatch {
            declared,
            found: quads.len() - 1,
        });
    }
    let [xmin, ymin, xmax, ymax] = quads[declared];
    let segments = quads[..declared]
        .iter()
        .map(|&[x0, y0, x1, y1]| Segment::new(x0, y0, x1, y1))
        .collect();
    Ok(SegmentScene {
        segments,
        clip: ClipRect::new(xmin, ymin, xmax, ymax),
    })
}

fn parse_scene_impl(input: &str) -> IResult<&str, (usize, Vec<[f32; 4]>)> {
    let (input, _) = multispace0(input)?;
    let (input, declared) = map_res(digit1, str::parse::<usize>)(input)?;
    let (input, quads) = many1(parse_quad)(input)?;
    Ok((input, (declared, quads)))
}

fn parse_quad(input: &str) -> IResult<&str, [f32; 4]> {
    let (input, _) = multispace1(input)?;
    let (input, x0) = float(input)?;
    let (input, _) = multispace1(input)?;
    let (input, y0) = float(input)?;
    let (input, _) = multispace1(input)?;
    let (input, x1) = float(input)?;
    let (input, _) = multispace1(input)?;
    let (input, y1) = float(input)?;
    Ok((input, [x0, y0, x1, y1]))
}
