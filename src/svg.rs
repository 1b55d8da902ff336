// Copyright 2025 the Bezout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG path representation of single segments and cubic chains.

use alloc::format;
use alloc::string::String;

use crate::{CubicBez, Error, Line, Point, QuadBez};

impl Line {
    /// The segment as SVG path data, `M{x0},{y0} L{x1},{y1}`.
    pub fn to_svg(&self) -> String {
        format!("M{},{} L{},{}", self.p0.x, self.p0.y, self.p1.x, self.p1.y)
    }
}

impl QuadBez {
    /// The segment as SVG path data, `M{x0},{y0} Q{x1},{y1} {x2},{y2}`.
    pub fn to_svg(&self) -> String {
        format!(
            "M{},{} Q{},{} {},{}",
            self.p0.x, self.p0.y, self.p1.x, self.p1.y, self.p2.x, self.p2.y
        )
    }

    /// Parse a moveto followed by a single `Q` or `q` command.
    pub fn from_svg(data: &str) -> Result<QuadBez, SvgParseError> {
        let [p0, p1, p2] = parse_segment(data, b'Q')?;
        Ok(QuadBez { p0, p1, p2 })
    }
}

impl CubicBez {
    /// The segment as SVG path data, `M{x0},{y0} C{x1},{y1} {x2},{y2} {x3},{y3}`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bezout::CubicBez;
    ///
    /// let c = CubicBez::new((0.0, 0.0), (1.0, 2.0), (3.0, 2.0), (4.0, 0.5));
    /// assert_eq!(c.to_svg(), "M0,0 C1,2 3,2 4,0.5");
    /// ```
    pub fn to_svg(&self) -> String {
        format!(
            "M{},{} C{},{} {},{} {},{}",
            self.p0.x, self.p0.y, self.p1.x, self.p1.y, self.p2.x, self.p2.y, self.p3.x, self.p3.y
        )
    }

    /// Parse a moveto followed by a single `C` or `c` command.
    ///
    /// Relative control points are offset by the start point.
    pub fn from_svg(data: &str) -> Result<CubicBez, SvgParseError> {
        let [p0, p1, p2, p3] = parse_segment(data, b'C')?;
        Ok(CubicBez { p0, p1, p2, p3 })
    }
}

/// A sequence of cubic segments rendered as one path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BezierChain<'a> {
    /// A lone segment.
    Single(&'a CubicBez),
    /// Two segments, the second written as a smooth continuation.
    Pair(&'a CubicBez, &'a CubicBez),
    /// Any number of segments, each starting where the previous one ends.
    Chain(&'a [CubicBez]),
}

impl<'a> BezierChain<'a> {
    /// Classify a slice of segments; `None` if it is empty.
    pub fn from_slice(segments: &'a [CubicBez]) -> Option<BezierChain<'a>> {
        match segments {
            [] => None,
            [single] => Some(BezierChain::Single(single)),
            [first, second] => Some(BezierChain::Pair(first, second)),
            _ => Some(BezierChain::Chain(segments)),
        }
    }

    /// Render the chain as SVG path data.
    ///
    /// Every segment after the first is written as an `S` command carrying
    /// its last two points. In a [`Chain`](BezierChain::Chain) each segment
    /// must start where the previous one ends, or this fails with
    /// [`Error::DisconnectedChain`]; a [`Pair`](BezierChain::Pair) is written
    /// without that check.
    ///
    /// # Examples
    ///
    /// ```
    /// use bezout::{BezierChain, Ellipse};
    ///
    /// let arcs = Ellipse::new((40.0, 50.0), 20.0, 10.0).to_cubic_bezs();
    /// let path = BezierChain::from_slice(&arcs[..2]).unwrap().to_svg().unwrap();
    /// assert_eq!(
    ///     path,
    ///     "M20,50 C20,44.477152000000004 28.954304,40 40,40S 60,44.477152000000004 60,50"
    /// );
    /// ```
    pub fn to_svg(&self) -> Result<String, Error> {
        match *self {
            BezierChain::Single(segment) => Ok(segment.to_svg()),
            BezierChain::Pair(first, second) => Ok(smooth_pair(first, second)),
            BezierChain::Chain(segments) => {
                let mut result = String::new();
                for (previous, pair) in segments.windows(2).enumerate() {
                    if pair[0].p3 != pair[1].p0 {
                        return Err(Error::DisconnectedChain {
                            index: previous + 1,
                            previous,
                        });
                    }
                    result.push_str(&smooth_pair(&pair[0], &pair[1]));
                }
                Ok(result)
            }
        }
    }
}

fn smooth_pair(first: &CubicBez, second: &CubicBez) -> String {
    format!(
        "{}S {},{} {},{}",
        first.to_svg(),
        second.p2.x,
        second.p2.y,
        second.p3.x,
        second.p3.y
    )
}

/// An error which can be returned when parsing an SVG.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum SvgParseError {
    /// A number was expected.
    #[error("a number was expected")]
    Wrong,
    /// The input string ended while still expecting input.
    #[error("unexpected end of input")]
    UnexpectedEof,
    /// Encountered an unknown or misplaced command letter.
    #[error("unexpected command '{0}'")]
    UnexpectedCommand(char),
}

/// Parse a moveto followed by one `command` (uppercase) with `N - 1` points.
fn parse_segment<const N: usize>(data: &str, command: u8) -> Result<[Point; N], SvgParseError> {
    let mut lexer = SvgLexer::new(data);
    let mut points = [Point::ZERO; N];

    match lexer.get_cmd()? {
        b'M' | b'm' => points[0] = lexer.get_number_pair()?,
        c => return Err(SvgParseError::UnexpectedCommand(char::from(c))),
    }
    lexer.last_pt = points[0];

    let c = lexer.get_cmd()?;
    if c.to_ascii_uppercase() != command {
        return Err(SvgParseError::UnexpectedCommand(char::from(c)));
    }
    for point in &mut points[1..] {
        *point = lexer.get_maybe_relative(c)?;
    }

    lexer.skip_ws();
    match lexer.get_byte() {
        None => Ok(points),
        Some(c) => Err(SvgParseError::UnexpectedCommand(char::from(c))),
    }
}

struct SvgLexer<'a> {
    data: &'a str,
    ix: usize,
    last_pt: Point,
}

impl SvgLexer<'_> {
    fn new(data: &str) -> SvgLexer<'_> {
        SvgLexer {
            data,
            ix: 0,
            last_pt: Point::ZERO,
        }
    }

    fn skip_ws(&mut self) {
        while let Some(&c) = self.data.as_bytes().get(self.ix) {
            if !(c == b' ' || c == 9 || c == 10 || c == 12 || c == 13) {
                break;
            }
            self.ix += 1;
        }
    }

    fn get_cmd(&mut self) -> Result<u8, SvgParseError> {
        self.skip_ws();
        let c = self.get_byte().ok_or(SvgParseError::UnexpectedEof)?;
        if c.is_ascii_alphabetic() {
            Ok(c)
        } else {
            self.unget();
            Err(SvgParseError::Wrong)
        }
    }

    fn get_byte(&mut self) -> Option<u8> {
        self.data.as_bytes().get(self.ix).map(|&c| {
            self.ix += 1;
            c
        })
    }

    fn unget(&mut self) {
        self.ix -= 1;
    }

    fn get_number(&mut self) -> Result<f64, SvgParseError> {
        self.skip_ws();
        let start = self.ix;
        let c = self.get_byte().ok_or(SvgParseError::UnexpectedEof)?;
        if !(c == b'-' || c == b'+') {
            self.unget();
        }
        let mut digit_count = 0;
        let mut seen_period = false;
        while let Some(c) = self.get_byte() {
            if c.is_ascii_digit() {
                digit_count += 1;
            } else if c == b'.' && !seen_period {
                seen_period = true;
            } else {
                self.unget();
                break;
            }
        }
        if digit_count > 0 {
            self.data[start..self.ix]
                .parse()
                .map_err(|_| SvgParseError::Wrong)
        } else {
            Err(SvgParseError::Wrong)
        }
    }

    fn get_number_pair(&mut self) -> Result<Point, SvgParseError> {
        let x = self.get_number()?;
        self.opt_comma();
        let y = self.get_number()?;
        self.opt_comma();
        Ok(Point::new(x, y))
    }

    fn get_maybe_relative(&mut self, cmd: u8) -> Result<Point, SvgParseError> {
        let pt = self.get_number_pair()?;
        if cmd.is_ascii_lowercase() {
            Ok(pt + self.last_pt)
        } else {
            Ok(pt)
        }
    }

    fn opt_comma(&mut self) {
        self.skip_ws();
        if let Some(c) = self.get_byte() {
            if c != b',' {
                self.unget();
            }
        }
    }
}
