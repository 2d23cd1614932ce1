use std::fs;

use rand::Rng;

use crate::error::ApproxError;

/// One observed `(x, y)` point. Immutable once read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f32,
    pub y: f32,
}

/// A scalar function the sampler can draw observations from.
///
/// Any closure or strategy object works; targets are always compiled in,
/// never loaded dynamically.
pub trait Target {
    fn evaluate(&self, x: f32) -> f32;
}

impl std::fmt::Debug for dyn Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Target")
    }
}

impl<F: Fn(f32) -> f32> Target for F {
    fn evaluate(&self, x: f32) -> f32 {
        self(x)
    }
}

/// Look up a built-in target function by name.
pub fn builtin(name: &str) -> Result<Box<dyn Target>, ApproxError> {
    match name {
        "sin" => Ok(Box::new(|x: f32| x.sin())),
        "cos" => Ok(Box::new(|x: f32| x.cos())),
        "square" => Ok(Box::new(|x: f32| x * x)),
        "abs" => Ok(Box::new(|x: f32| x.abs())),
        other => Err(ApproxError::BadFunction(other.to_string())),
    }
}

/// Draw `count` samples of `target` at uniform-random positions in
/// `[min, max)`.
pub fn draw<T: Target + ?Sized, R: Rng>(
    target: &T,
    min: f32,
    max: f32,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Sample>, ApproxError> {
    if !(min.is_finite() && max.is_finite()) || min > max {
        return Err(ApproxError::InvalidDomain { min, max });
    }
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let x = rng.gen::<f32>() * (max - min) + min;
        out.push(Sample {
            x,
            y: target.evaluate(x),
        });
    }
    Ok(out)
}

/// Parse one `"x y"` line. The pair splits on the first space.
pub fn parse_line(line: &str, line_no: usize) -> Result<Sample, ApproxError> {
    let malformed = || ApproxError::MalformedSample {
        line: line_no,
        content: line.to_string(),
    };
    let index = line.find(' ').ok_or_else(malformed)?;
    let x = line[..index].trim().parse::<f32>().map_err(|_| malformed())?;
    let y = line[index + 1..].trim().parse::<f32>().map_err(|_| malformed())?;
    Ok(Sample { x, y })
}

/// Parse a whole samples document, one pair per line. Blank lines are
/// skipped. An empty result is not an error here; the trainer rejects empty
/// sample sets itself.
pub fn parse_samples(text: &str) -> Result<Vec<Sample>, ApproxError> {
    let mut samples = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        samples.push(parse_line(line, i + 1)?);
    }
    Ok(samples)
}

/// Read and parse a samples file.
pub fn read_samples(path: &str) -> Result<Vec<Sample>, ApproxError> {
    let text = fs::read_to_string(path).map_err(|e| ApproxError::SamplesFile {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    parse_samples(&text)
}
