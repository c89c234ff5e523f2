//! Auto-fit text sizing.
//!
//! Text width scales linearly with font size for a fixed face, so one
//! measurement at a reference size is enough to find the size that makes the
//! text exactly fill its container.

use std::fmt;

use tracing::trace;

pub const REFERENCE_FONT_SIZE: f64 = 120.0;
pub const HORIZONTAL_PADDING: f64 = 32.0;
/// Fallback size for degenerate inputs. Valid fits are never clamped, so the
/// result stays linear in the target width.
pub const MIN_FONT_SIZE: f64 = 4.0;

/// Natural rendered width of `text` at `font_size`.
pub trait TextMeasure {
    fn measure(&self, text: &str, font_size: f64) -> f64;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, f64) -> f64,
{
    fn measure(&self, text: &str, font_size: f64) -> f64 {
        self(text, font_size)
    }
}

/// Fixed-advance face: every character is `advance` em wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Monospace {
    pub advance: f64,
}

impl Monospace {
    pub fn new(advance: f64) -> Self {
        Self { advance }
    }
}

impl TextMeasure for Monospace {
    fn measure(&self, text: &str, font_size: f64) -> f64 {
        text.chars().count() as f64 * self.advance * font_size
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOptions {
    pub reference_font_size: f64,
    pub horizontal_padding: f64,
    pub min_font_size: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            reference_font_size: REFERENCE_FONT_SIZE,
            horizontal_padding: HORIZONTAL_PADDING,
            min_font_size: MIN_FONT_SIZE,
        }
    }
}

/// Inputs for which no meaningful size exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitError {
    /// Text measures zero wide at the reference size.
    EmptyText,
    /// Container is no wider than its padding.
    NoRoom { container_width: f64, padding: f64 },
    /// A width or size was NaN or infinite.
    NonFinite,
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitError::EmptyText => write!(f, "Text has no width to fit"),
            FitError::NoRoom {
                container_width,
                padding,
            } => write!(
                f,
                "Container width {} leaves no room after {} padding",
                container_width, padding
            ),
            FitError::NonFinite => write!(f, "Non-finite width in fit computation"),
        }
    }
}

impl std::error::Error for FitError {}

/// Font size that makes `text` span `container_width - padding`.
pub fn try_font_size<M: TextMeasure + ?Sized>(
    text: &str,
    container_width: f64,
    measure: &M,
    opts: &FitOptions,
) -> Result<f64, FitError> {
    if !container_width.is_finite() {
        return Err(FitError::NonFinite);
    }

    let natural = measure.measure(text, opts.reference_font_size);
    if !natural.is_finite() {
        return Err(FitError::NonFinite);
    }
    if natural <= 0.0 {
        return Err(FitError::EmptyText);
    }

    let target = container_width - opts.horizontal_padding;
    if target <= 0.0 {
        return Err(FitError::NoRoom {
            container_width,
            padding: opts.horizontal_padding,
        });
    }

    let size = opts.reference_font_size * (target / natural);
    if !size.is_finite() {
        return Err(FitError::NonFinite);
    }
    Ok(size)
}

/// Like [`try_font_size`], but degenerate inputs yield `min_font_size`.
pub fn compute_font_size<M: TextMeasure + ?Sized>(
    text: &str,
    container_width: f64,
    measure: &M,
    opts: &FitOptions,
) -> f64 {
    match try_font_size(text, container_width, measure, opts) {
        Ok(size) => size,
        Err(err) => {
            trace!(%err, "fit fell back to minimum size");
            opts.min_font_size
        }
    }
}

/// Memoized fit: recomputes only when the text or container width changes.
#[derive(Debug, Clone, Default)]
pub struct AutoFit {
    opts: FitOptions,
    last: Option<(String, f64, f64)>,
}

impl AutoFit {
    pub fn new(opts: FitOptions) -> Self {
        Self { opts, last: None }
    }

    pub fn options(&self) -> &FitOptions {
        &self.opts
    }

    pub fn request<M: TextMeasure + ?Sized>(
        &mut self,
        text: &str,
        container_width: f64,
        measure: &M,
    ) -> f64 {
        if let Some((last_text, last_width, size)) = &self.last
            && last_text == text
            && last_width.to_bits() == container_width.to_bits()
        {
            return *size;
        }

        let size = compute_font_size(text, container_width, measure, &self.opts);
        trace!(container_width, size, "fit recomputed");
        self.last = Some((text.to_owned(), container_width, size));
        size
    }

    /// Most recent result, if any.
    pub fn current(&self) -> Option<f64> {
        self.last.as_ref().map(|(_, _, size)| *size)
    }
}
