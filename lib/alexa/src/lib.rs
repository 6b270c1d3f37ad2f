mod inspection;

pub use inspection::InspectionDeviceSelector;
