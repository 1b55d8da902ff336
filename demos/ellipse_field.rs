// Copyright 2025 the Bezout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scatter random ellipses and a cubic over a canvas and print an SVG
//! marking every intersection between them.

use bezout::{BezierChain, Canvas, CubicBez, Ellipse, Point};
use rand::Rng;

const WIDTH: f64 = 500.0;
const HEIGHT: f64 = 400.0;

fn rand_point(rng: &mut impl Rng) -> Point {
    Point::new(rng.random_range(0.0..WIDTH), rng.random_range(0.0..HEIGHT))
}

fn rand_ellipse(rng: &mut impl Rng) -> Ellipse {
    Ellipse::new(
        rand_point(rng),
        rng.random_range(10.0..120.0),
        rng.random_range(10.0..120.0),
    )
}

fn main() {
    let mut rng = rand::rng();
    let canvas = Canvas::new(WIDTH, HEIGHT);

    let ellipses: Vec<Ellipse> = core::iter::repeat_with(|| rand_ellipse(&mut rng))
        .filter(|e| canvas.contains(e))
        .take(5)
        .collect();
    let cubic = loop {
        let c = CubicBez::new(
            rand_point(&mut rng),
            rand_point(&mut rng),
            rand_point(&mut rng),
            rand_point(&mut rng),
        );
        if canvas.contains(&c) {
            break c;
        }
    };

    println!("<svg width='{WIDTH}' height='{HEIGHT}' xmlns='http://www.w3.org/2000/svg'>");
    for ellipse in &ellipses {
        let arcs = ellipse.to_cubic_bezs();
        if let Some(Ok(d)) = BezierChain::from_slice(&arcs).map(|chain| chain.to_svg()) {
            println!("  <path d='{d}' stroke='#000' fill='none' />");
        }
    }
    println!("  <path d='{}' stroke='#008' fill='none' />", cubic.to_svg());

    let mut hits = Vec::new();
    for (i, a) in ellipses.iter().enumerate() {
        for b in &ellipses[i + 1..] {
            match a.intersect_ellipse(b) {
                Ok(found) => hits.extend(found),
                Err(e) => eprintln!("ellipse/ellipse failed: {e}"),
            }
        }
        match cubic.intersect_ellipse(a) {
            Ok(found) => hits.extend(found),
            Err(e) => eprintln!("cubic/ellipse failed: {e}"),
        }
    }
    for hit in hits {
        println!(
            "  <circle cx='{}' cy='{}' r='3' fill='#c00' />",
            hit.point.x, hit.point.y
        );
    }
    println!("</svg>");
}
