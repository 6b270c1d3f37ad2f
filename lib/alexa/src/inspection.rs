use increment::{Config, Error, Incrementable};
use log::debug;

pub struct InspectionDeviceSelector<I> {
    incrementer: I,
}

impl<I> std::fmt::Debug for InspectionDeviceSelector<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InspectionDeviceSelector").finish()
    }
}

impl InspectionDeviceSelector<Box<dyn Incrementable + Send>> {
    pub fn from_config(config: Config) -> Result<Self, Error> {
        Ok(InspectionDeviceSelector::new(config.build()?))
    }
}

impl<I: Incrementable> InspectionDeviceSelector<I> {
    pub fn new(incrementer: I) -> InspectionDeviceSelector<I> {
        InspectionDeviceSelector { incrementer }
    }

    pub fn sample_device_position(&mut self) -> u32 {
        let position = self.incrementer.next();
        debug!("sampling device at position {}", position);

        position
    }
}
