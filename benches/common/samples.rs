use casteljau_viz::Point;
use once_cell::sync::Lazy;

/// Points generated randomly
/// ```python
/// from random import random
/// for i in range(10):
///     print(f"Point::new({random()*720:.1f}, {random()*640:.1f}),")
/// ```
pub static POINTS: [(f32, f32); 10] = [
    (412.3, 88.1),
    (97.6, 301.4),
    (655.0, 12.9),
    (230.8, 590.2),
    (18.4, 240.7),
    (503.9, 455.3),
    (344.1, 133.6),
    (701.2, 377.0),
    (159.5, 622.8),
    (586.7, 205.4),
];

pub static CHAINS: Lazy<Chains> = Lazy::new(Chains::new);
#[allow(non_snake_case)]
pub struct Chains {
    pub CUBIC: Vec<Point>,
    pub TEN: Vec<Point>,
    pub HUNDRED: Vec<Point>,
}
impl Chains {
    pub fn new() -> Chains {
        let point = |i: usize| {
            let (x, y) = POINTS[i % POINTS.len()];
            Point::new(x, y)
        };
        Chains {
            CUBIC:   (0..4).map(point).collect(),
            TEN:     (0..10).map(point).collect(),
            HUNDRED: (0..100).map(point).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item=(&'static str, &Vec<Point>)> {
        [("cubic", &self.CUBIC), ("ten", &self.TEN), ("hundred", &self.HUNDRED)].into_iter()
    }
}
