// Pattern 4: Interface Segregation Principle
// Working and eating are separate traits. A robot implements only what it
// needs instead of stubbing out `eat`.

use std::io::Write;

use crate::error::Result;

pub trait Workable {
    fn work(&self, out: &mut dyn Write) -> Result<()>;
}

pub trait Eatable {
    fn eat(&self, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HumanWorker;

impl Workable for HumanWorker {
    fn work(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Human is working")?;
        Ok(())
    }
}

impl Eatable for HumanWorker {
    fn eat(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Human is eating")?;
        Ok(())
    }
}

/// Only works. There is no `eat` to call:
///
/// ```compile_fail
/// use solid_principles::p4_interface_segregation::{Eatable, RobotWorker};
///
/// let mut out = Vec::new();
/// RobotWorker.eat(&mut out).unwrap();
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct RobotWorker;

impl Workable for RobotWorker {
    fn work(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Robot is working")?;
        Ok(())
    }
}

/// Runs a shift for any mix of workers.
pub fn run_shift(workers: &[&dyn Workable], out: &mut dyn Write) -> Result<()> {
    for worker in workers {
        worker.work(out)?;
    }
    Ok(())
}
