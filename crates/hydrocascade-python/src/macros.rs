/// Generate a frozen `#[pyclass]` struct where each field is `f64`.
///
/// Also generates a `from_fluxes()` method that copies values from the
/// corresponding Rust record.
macro_rules! define_step_result {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident from $core_type:ty {
            $($field:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[pyo3::pyclass(frozen)]
        $vis struct $name {
            $(
                #[pyo3(get)]
                pub $field: f64,
            )+
        }

        impl $name {
            pub fn from_fluxes(f: &$core_type) -> Self {
                Self {
                    $(
                        $field: f.$field,
                    )+
                }
            }
        }
    };
}

/// Convert any `FluxRecord` into a `PyDict` keyed by its exported names.
macro_rules! record_to_dict {
    ($py:expr, $record:expr, $ty:ty) => {{
        let dict = pyo3::types::PyDict::new($py);
        for (name, value) in <$ty>::field_names().iter().zip($record.to_array()) {
            dict.set_item(*name, value)?;
        }
        dict
    }};
}
