/*!
clash2d
========

**clash2d** is a narrow-phase collision detection library for 2-dimensional
convex polygons, written with the rust programming language.

Given two positioned convex polygons it decides whether they overlap and, if
they do, produces a penetration depth, a separation normal, and a small set
of contact points suitable for physical resolution:

* [`query::intersection_test`] — boolean overlap test (GJK).
* [`query::penetration`] — depth and normal via the separating axis test.
* [`query::contact`] — full GJK → EPA → clipping pipeline producing a
  [`query::ContactManifold`].

The returned normal always points from the second polygon toward the first.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod math;
pub mod query;
pub mod shape;
pub mod utils;
