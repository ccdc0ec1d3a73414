use crate::trackers::centroid::centroid_py::{
    PyCentroidTracker, PyDetection, PyTrackedDetection,
};
use pyo3::prelude::*;

#[pymodule]
#[pyo3(name = "centroid_tracker")]
fn centroid_tracker(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add_class::<PyDetection>()?;
    m.add_class::<PyTrackedDetection>()?;
    m.add_class::<PyCentroidTracker>()?;
    Ok(())
}
