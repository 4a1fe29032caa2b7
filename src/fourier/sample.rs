use crate::complex::Complex;

/// A time-domain sample the transforms accept.
///
/// Real samples are lifted onto the real axis, so one algorithm body serves
/// both real and complex input.
pub trait Sample: Copy {
    fn to_complex(self) -> Complex;
}

impl Sample for f64 {
    fn to_complex(self) -> Complex {
        Complex::new(self, 0.0)
    }
}

impl Sample for f32 {
    fn to_complex(self) -> Complex {
        Complex::new(self as f64, 0.0)
    }
}

impl Sample for i32 {
    fn to_complex(self) -> Complex {
        Complex::new(self as f64, 0.0)
    }
}

impl Sample for Complex {
    fn to_complex(self) -> Complex {
        self
    }
}

impl Sample for num_complex::Complex<f64> {
    fn to_complex(self) -> Complex {
        Complex::new(self.re, self.im)
    }
}

/// Lifts a whole sequence into the complex plane.
pub fn to_complex<S: Sample>(samples: &[S]) -> Vec<Complex> {
    samples.iter().map(|&s| s.to_complex()).collect()
}
