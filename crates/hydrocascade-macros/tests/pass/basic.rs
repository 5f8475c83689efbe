use hydrocascade_macros::FluxRecord;

#[derive(Debug, Clone, Copy, PartialEq, FluxRecord)]
pub struct StoreLevels {
    pub interception: f64,
    pub soil: f64,
    pub ground: f64,
}

fn main() {
    let levels = StoreLevels { interception: 1.0, soil: 2.0, ground: 3.0 };
    assert_eq!(StoreLevels::N_FIELDS, 3);
    assert_eq!(StoreLevels::field_names(), &["interception", "soil", "ground"]);

    let arr = levels.to_array();
    assert_eq!(arr, [1.0, 2.0, 3.0]);
    assert_eq!(StoreLevels::from_array(&arr), levels);
}
