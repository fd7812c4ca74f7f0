//! Elementwise evaluation over broadcast arrays.

use crate::error::ModelError;
use crate::model::CmodIfr2;
use crate::traits::ForwardModel;
use ndarray::{ArrayBase, ArrayD, ArrayViewD, Data, Dimension, IxDyn, Zip};
use tracing::debug;

/// Computes the common shape of several arrays under trailing-dimension broadcasting.
///
/// Shapes are aligned on their last axis; missing leading axes count as length 1.
/// Two lengths are compatible when they are equal or one of them is 1.
pub fn broadcast_shape(shapes: &[&[usize]]) -> Result<Vec<usize>, ModelError> {
    let ndim = shapes.iter().map(|s| s.len()).max().unwrap_or(0);
    let mut out = vec![1usize; ndim];
    let mut seen: Vec<Option<&[usize]>> = vec![None; ndim];

    for &shape in shapes {
        let offset = ndim - shape.len();
        for (axis, &len) in shape.iter().enumerate() {
            let slot = offset + axis;
            if len == out[slot] || len == 1 {
                continue;
            }
            if out[slot] == 1 {
                out[slot] = len;
                seen[slot] = Some(shape);
                continue;
            }
            return Err(ModelError::IncompatibleShapes {
                left: seen[slot].map(|s| s.to_vec()).unwrap_or_default(),
                right: shape.to_vec(),
            });
        }
    }

    Ok(out)
}

fn broadcast_view<'a>(
    view: &'a ArrayViewD<'a, f64>,
    shape: &[usize],
) -> Result<ArrayViewD<'a, f64>, ModelError> {
    view.broadcast(IxDyn(shape))
        .ok_or_else(|| ModelError::IncompatibleShapes {
            left: view.shape().to_vec(),
            right: shape.to_vec(),
        })
}

/// Evaluates CMOD-IFR2 elementwise over broadcast-compatible arrays.
///
/// Zero-dimensional arrays behave as scalars. The output takes the broadcast shape
/// of the three inputs; NaN and infinite values are passed through, never reported.
pub fn evaluate_array<S1, S2, S3, D1, D2, D3>(
    wind_speed: &ArrayBase<S1, D1>,
    wind_dir: &ArrayBase<S2, D2>,
    inc_angle: &ArrayBase<S3, D3>,
) -> Result<ArrayD<f64>, ModelError>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    S3: Data<Elem = f64>,
    D1: Dimension,
    D2: Dimension,
    D3: Dimension,
{
    evaluate_array_with(&CmodIfr2::new(), wind_speed, wind_dir, inc_angle)
}

/// Same as [`evaluate_array`], for any forward model.
pub fn evaluate_array_with<M, S1, S2, S3, D1, D2, D3>(
    model: &M,
    wind_speed: &ArrayBase<S1, D1>,
    wind_dir: &ArrayBase<S2, D2>,
    inc_angle: &ArrayBase<S3, D3>,
) -> Result<ArrayD<f64>, ModelError>
where
    M: ForwardModel<f64>,
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    S3: Data<Elem = f64>,
    D1: Dimension,
    D2: Dimension,
    D3: Dimension,
{
    let speed = wind_speed.view().into_dyn();
    let dir = wind_dir.view().into_dyn();
    let inc = inc_angle.view().into_dyn();

    let shape = broadcast_shape(&[speed.shape(), dir.shape(), inc.shape()])?;
    debug!(
        shape = ?shape,
        elements = shape.iter().product::<usize>(),
        "evaluating forward model over broadcast arrays"
    );

    let speed = broadcast_view(&speed, &shape)?;
    let dir = broadcast_view(&dir, &shape)?;
    let inc = broadcast_view(&inc, &shape)?;

    Ok(Zip::from(&speed)
        .and(&dir)
        .and(&inc)
        .map_collect(|&v, &phi, &theta| model.nrcs(v, phi, theta)))
}
