#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
}

pub const CURRENT_RPM: Tag = Tag {
    key: "currentRpm",
    label: "RPM",
    unit: "rpm",
};

pub const CURRENT_FUEL_FLOW: Tag = Tag {
    key: "currentFuelFlow",
    label: "Fuel",
    unit: "L/h",
};

pub const ECO_MODE: Tag = Tag {
    key: "isEcoMode",
    label: "Mode",
    unit: "",
};

pub const MEDIAN_FUEL_FLOW: Tag = Tag {
    key: "medianFuelFlow",
    label: "Median",
    unit: "L/h",
};

pub const FUEL_FLOW_AXIS: Tag = Tag {
    key: "fuelFlow",
    label: "Fuel Flow",
    unit: "L/h",
};
