// Pattern 2: Open/Closed Principle
// Callers depend on the `Shape` capability. New shapes are added as new types,
// without editing the existing ones or the code that reads their areas.

use std::f64::consts::PI;

use crate::error::{Result, SolidError};

pub trait Shape {
    fn name(&self) -> &'static str;
    fn area(&self) -> f64;
}

fn check_dimension(shape: &'static str, dimension: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SolidError::invalid_dimension(shape, dimension, value))
    }
}

// Valid dimensions can still overflow to `inf` or underflow to `0.0`.
fn check_area<S: Shape>(shape: S) -> Result<S> {
    let area = shape.area();
    if area.is_finite() && area > 0.0 {
        Ok(shape)
    } else {
        Err(SolidError::InvalidArea {
            shape: shape.name(),
            area,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self> {
        let radius = check_dimension("Circle", "radius", radius)?;
        check_area(Circle { radius })
    }
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "Circle"
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    length: f64,
    width: f64,
}

impl Rectangle {
    pub fn new(length: f64, width: f64) -> Result<Self> {
        let length = check_dimension("Rectangle", "length", length)?;
        let width = check_dimension("Rectangle", "width", width)?;
        check_area(Rectangle { length, width })
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        "Rectangle"
    }

    fn area(&self) -> f64 {
        self.length * self.width
    }
}
