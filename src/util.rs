use float_cmp::{F64Margin, approx_eq};
use ndarray::prelude::*;

pub fn comp_f64(exemplar: &f64, calc: &f64, precision: F64Margin, test: &str, idx: &str) {
    assert!(
        approx_eq!(f64, *calc, *exemplar, precision),
        " Failed test {} at location {}\n  exemplar: {}\n      calc: {}",
        test,
        idx,
        exemplar,
        calc
    );
}

pub fn comp_array1(exemplar: &Array1<f64>, calc: &Array1<f64>, precision: F64Margin, test: &str) {
    assert_eq!(
        exemplar.len(),
        calc.len(),
        " Failed test {}: length mismatch",
        test
    );
    for k in 0..calc.len() {
        comp_f64(
            &exemplar[k],
            &calc[k],
            precision,
            test,
            format!("({})", k).as_str(),
        );
    }
}

pub fn comp_array2(exemplar: &Array2<f64>, calc: &Array2<f64>, precision: F64Margin, test: &str) {
    assert_eq!(
        exemplar.dim(),
        calc.dim(),
        " Failed test {}: shape mismatch",
        test
    );
    for j in 0..calc.nrows() {
        for k in 0..calc.ncols() {
            comp_f64(
                &exemplar[(j, k)],
                &calc[(j, k)],
                precision,
                test,
                format!("({}, {})", j, k).as_str(),
            );
        }
    }
}
