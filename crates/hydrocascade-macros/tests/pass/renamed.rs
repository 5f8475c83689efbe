use hydrocascade_macros::FluxRecord;

#[derive(Debug, Clone, Copy, FluxRecord)]
pub struct Outflows {
    #[flux(name = "Qt1")]
    pub interflow: f64,
    #[flux(name = "Qm")]
    pub direct_discharge: f64,
    pub streamflow: f64,
}

fn main() {
    let f = Outflows { interflow: 0.8, direct_discharge: 0.0, streamflow: 0.4 };
    assert_eq!(Outflows::field_names(), &["Qt1", "Qm", "streamflow"]);
    assert_eq!(f.to_array()[0], 0.8);
}
