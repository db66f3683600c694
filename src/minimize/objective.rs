use crate::minimize::{MinimizerError, numdiff::NumDiff};
use crate::point::Point;
use dyn_clone::DynClone;
use ndarray::prelude::*;

// Objective function value
pub trait ObjFn: DynClone {
    fn call(&self, x: &Point) -> f64;
}
dyn_clone::clone_trait_object!(ObjFn);

// Objective with a gradient
pub trait ObjGradFn: ObjFn + DynClone {
    fn grad(&self, x: &Point) -> Array1<f64>;
}
dyn_clone::clone_trait_object!(ObjGradFn);

// Objective with a gradient and hessian
pub trait ObjHessFn: ObjGradFn + DynClone {
    fn hessian(&self, x: &Point) -> Array2<f64>;
}
dyn_clone::clone_trait_object!(ObjHessFn);

impl<F> ObjFn for F
where
    F: Fn(&Point) -> f64 + Clone,
{
    fn call(&self, x: &Point) -> f64 {
        self(x)
    }
}

// Wrapper for multi-dimensional function w/analytic gradient
#[derive(Clone)]
pub struct MultiDimGradFn<F, GF>(pub F, pub GF)
where
    F: Fn(&Point) -> f64 + Clone,
    GF: Fn(&Point) -> Array1<f64> + Clone;

impl<F, GF> MultiDimGradFn<F, GF>
where
    F: Fn(&Point) -> f64 + Clone,
    GF: Fn(&Point) -> Array1<f64> + Clone,
{
    pub fn new(f: F, gf: GF) -> Self {
        MultiDimGradFn(f, gf)
    }
}

impl<F, GF> ObjFn for MultiDimGradFn<F, GF>
where
    F: Fn(&Point) -> f64 + Clone,
    GF: Fn(&Point) -> Array1<f64> + Clone,
{
    fn call(&self, x: &Point) -> f64 {
        (self.0)(x)
    }
}

impl<F, GF> ObjGradFn for MultiDimGradFn<F, GF>
where
    F: Fn(&Point) -> f64 + Clone,
    GF: Fn(&Point) -> Array1<f64> + Clone,
{
    fn grad(&self, x: &Point) -> Array1<f64> {
        (self.1)(x)
    }
}

// Wrapper for multi-dimensional function w/analytic gradient and hessian
#[derive(Clone)]
pub struct MultiDimHessFn<F, GF, HF>(pub F, pub GF, pub HF)
where
    F: Fn(&Point) -> f64 + Clone,
    GF: Fn(&Point) -> Array1<f64> + Clone,
    HF: Fn(&Point) -> Array2<f64> + Clone;

impl<F, GF, HF> MultiDimHessFn<F, GF, HF>
where
    F: Fn(&Point) -> f64 + Clone,
    GF: Fn(&Point) -> Array1<f64> + Clone,
    HF: Fn(&Point) -> Array2<f64> + Clone,
{
    pub fn new(f: F, gf: GF, hf: HF) -> Self {
        MultiDimHessFn(f, gf, hf)
    }
}

impl<F, GF, HF> ObjFn for MultiDimHessFn<F, GF, HF>
where
    F: Fn(&Point) -> f64 + Clone,
    GF: Fn(&Point) -> Array1<f64> + Clone,
    HF: Fn(&Point) -> Array2<f64> + Clone,
{
    fn call(&self, x: &Point) -> f64 {
        (self.0)(x)
    }
}

impl<F, GF, HF> ObjGradFn for MultiDimHessFn<F, GF, HF>
where
    F: Fn(&Point) -> f64 + Clone,
    GF: Fn(&Point) -> Array1<f64> + Clone,
    HF: Fn(&Point) -> Array2<f64> + Clone,
{
    fn grad(&self, x: &Point) -> Array1<f64> {
        (self.1)(x)
    }
}

impl<F, GF, HF> ObjHessFn for MultiDimHessFn<F, GF, HF>
where
    F: Fn(&Point) -> f64 + Clone,
    GF: Fn(&Point) -> Array1<f64> + Clone,
    HF: Fn(&Point) -> Array2<f64> + Clone,
{
    fn hessian(&self, x: &Point) -> Array2<f64> {
        (self.2)(x)
    }
}

/// Objective whose gradient and hessian are approximated by central differences
#[derive(Clone)]
pub struct NumDiffFn<F>
where
    F: Fn(&Point) -> f64 + Clone,
{
    f: F,
    diff: NumDiff,
}

impl<F> NumDiffFn<F>
where
    F: Fn(&Point) -> f64 + Clone,
{
    /// Wrap `f` using the default perturbation step
    pub fn new(f: F) -> Self {
        Self {
            f,
            diff: NumDiff::default(),
        }
    }

    /// Wrap `f` with a custom perturbation step
    pub fn with_step(f: F, step: f64) -> Result<Self, MinimizerError> {
        Ok(Self {
            f,
            diff: NumDiff::new(step)?,
        })
    }

    pub fn step(&self) -> f64 {
        self.diff.step()
    }
}

impl<F> ObjFn for NumDiffFn<F>
where
    F: Fn(&Point) -> f64 + Clone,
{
    fn call(&self, x: &Point) -> f64 {
        (self.f)(x)
    }
}

impl<F> ObjGradFn for NumDiffFn<F>
where
    F: Fn(&Point) -> f64 + Clone,
{
    fn grad(&self, x: &Point) -> Array1<f64> {
        self.diff.gradient(&self.f, x)
    }
}

impl<F> ObjHessFn for NumDiffFn<F>
where
    F: Fn(&Point) -> f64 + Clone,
{
    fn hessian(&self, x: &Point) -> Array2<f64> {
        self.diff.hessian(&self.f, x)
    }
}
