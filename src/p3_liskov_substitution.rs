// Pattern 3: Liskov Substitution Principle
// Any `Bird` can stand in for any other because no bird promises to fly.
// Flight is its own capability, discovered through `as_flyable`.

use std::io::Write;

use crate::error::Result;

pub trait Flyable {
    fn fly(&self, out: &mut dyn Write) -> Result<()>;
}

pub trait Bird {
    fn make_sound(&self, out: &mut dyn Write) -> Result<()>;

    /// Flight-capable birds return themselves here.
    fn as_flyable(&self) -> Option<&dyn Flyable> {
        None
    }

    fn can_fly(&self) -> bool {
        self.as_flyable().is_some()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Sparrow;

impl Bird for Sparrow {
    fn make_sound(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Chirp chirp")?;
        Ok(())
    }

    fn as_flyable(&self) -> Option<&dyn Flyable> {
        Some(self)
    }
}

impl Flyable for Sparrow {
    fn fly(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Flying")?;
        Ok(())
    }
}

/// Does not implement [`Flyable`], so asking it to fly is a type error:
///
/// ```compile_fail
/// use solid_principles::p3_liskov_substitution::{Flyable, Penguin};
///
/// let mut out = Vec::new();
/// Penguin.fly(&mut out).unwrap();
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Penguin;

impl Bird for Penguin {
    fn make_sound(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Squawk")?;
        Ok(())
    }
}

/// Flies if it can; otherwise writes `fallback`.
pub fn try_fly(bird: &dyn Bird, out: &mut dyn Write, fallback: &str) -> Result<()> {
    match bird.as_flyable() {
        Some(flyer) => flyer.fly(out),
        None => {
            writeln!(out, "{}", fallback)?;
            Ok(())
        }
    }
}

/// The hierarchy this module avoids: every bird is forced to fly, and a
/// penguin can only refuse at runtime. Substituting `NaivePenguin` where a
/// `NaiveBird` is expected breaks callers that trusted `fly`.
pub mod naive {
    use std::io::Write;

    use crate::error::{Result, SolidError};

    pub trait NaiveBird {
        fn make_sound(&self, out: &mut dyn Write) -> Result<()>;
        fn fly(&self, out: &mut dyn Write) -> Result<()>;
    }

    #[derive(Debug, Default, Clone, Copy)]
    pub struct NaiveSparrow;

    impl NaiveBird for NaiveSparrow {
        fn make_sound(&self, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "Chirp chirp")?;
            Ok(())
        }

        fn fly(&self, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "Flying")?;
            Ok(())
        }
    }

    #[derive(Debug, Default, Clone, Copy)]
    pub struct NaivePenguin;

    impl NaiveBird for NaivePenguin {
        fn make_sound(&self, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "Squawk")?;
            Ok(())
        }

        fn fly(&self, _out: &mut dyn Write) -> Result<()> {
            Err(SolidError::UnsupportedOperation {
                variant: "Penguin",
                operation: "fly",
            })
        }
    }
}
