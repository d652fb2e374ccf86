// Pattern 5: Dependency Inversion Principle
// `LightSwitch` depends on the `Switchable` abstraction and is handed its
// device from outside, so it never names a concrete device.

use std::io::Write;

use tracing::trace;

use crate::error::Result;

pub trait Switchable {
    fn turn_on(&self, out: &mut dyn Write) -> Result<()>;
    fn turn_off(&self, out: &mut dyn Write) -> Result<()>;
}

impl<S: Switchable + ?Sized> Switchable for Box<S> {
    fn turn_on(&self, out: &mut dyn Write) -> Result<()> {
        (**self).turn_on(out)
    }

    fn turn_off(&self, out: &mut dyn Write) -> Result<()> {
        (**self).turn_off(out)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LightBulb;

impl Switchable for LightBulb {
    fn turn_on(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "LightBulb turned on")?;
        Ok(())
    }

    fn turn_off(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "LightBulb turned off")?;
        Ok(())
    }
}

pub struct LightSwitch<D: Switchable> {
    device: D,
}

impl<D: Switchable> LightSwitch<D> {
    pub fn new(device: D) -> Self {
        LightSwitch { device }
    }

    pub fn switch_on(&self, out: &mut dyn Write) -> Result<()> {
        trace!("forwarding switch_on");
        self.device.turn_on(out)
    }

    pub fn switch_off(&self, out: &mut dyn Write) -> Result<()> {
        trace!("forwarding switch_off");
        self.device.turn_off(out)
    }

    pub fn device(&self) -> &D {
        &self.device
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    // Two unrelated test doubles; the switch must treat them the same.
    #[derive(Default)]
    struct CountingLamp {
        on_calls: Cell<u32>,
        off_calls: Cell<u32>,
    }

    impl Switchable for CountingLamp {
        fn turn_on(&self, _out: &mut dyn Write) -> Result<()> {
            self.on_calls.set(self.on_calls.get() + 1);
            Ok(())
        }

        fn turn_off(&self, _out: &mut dyn Write) -> Result<()> {
            self.off_calls.set(self.off_calls.get() + 1);
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingFan {
        calls: std::cell::RefCell<Vec<&'static str>>,
    }

    impl Switchable for RecordingFan {
        fn turn_on(&self, out: &mut dyn Write) -> Result<()> {
            self.calls.borrow_mut().push("on");
            writeln!(out, "Fan spinning")?;
            Ok(())
        }

        fn turn_off(&self, out: &mut dyn Write) -> Result<()> {
            self.calls.borrow_mut().push("off");
            writeln!(out, "Fan stopped")?;
            Ok(())
        }
    }

    #[test]
    fn test_light_bulb_messages() {
        let switch = LightSwitch::new(LightBulb);
        let mut buf = Vec::new();
        switch.switch_on(&mut buf).unwrap();
        switch.switch_off(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "LightBulb turned on\nLightBulb turned off\n"
        );
    }

    #[test]
    fn test_switch_on_delegates_once() {
        let switch = LightSwitch::new(CountingLamp::default());
        let mut buf = Vec::new();

        switch.switch_on(&mut buf).unwrap();
        assert_eq!(switch.device().on_calls.get(), 1);
        assert_eq!(switch.device().off_calls.get(), 0);

        switch.switch_off(&mut buf).unwrap();
        assert_eq!(switch.device().on_calls.get(), 1);
        assert_eq!(switch.device().off_calls.get(), 1);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_switch_works_with_any_device() {
        let switch = LightSwitch::new(RecordingFan::default());
        let mut buf = Vec::new();

        switch.switch_on(&mut buf).unwrap();
        switch.switch_off(&mut buf).unwrap();

        assert_eq!(*switch.device().calls.borrow(), vec!["on", "off"]);
        assert_eq!(String::from_utf8(buf).unwrap(), "Fan spinning\nFan stopped\n");
    }

    #[test]
    fn test_switch_over_trait_object() {
        let bulb: Box<dyn Switchable> = Box::new(LightBulb);
        let switch = LightSwitch::new(bulb);
        let mut buf = Vec::new();
        switch.switch_on(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "LightBulb turned on\n");
    }
}
