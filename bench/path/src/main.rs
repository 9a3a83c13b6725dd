extern crate sketch_path;
#[macro_use]
extern crate bencher;

use sketch_path::math::point;
use sketch_path::{Direction, Path, PathF32};

use bencher::Bencher;

#[cfg(feature = "profiling")]
const N: usize = 100;
#[cfg(not(feature = "profiling"))]
const N: usize = 1;

fn star(n: usize) -> PathF32 {
    let mut path = Path::with_capacity(n * 3 + 2);
    path.move_to(point(0.0, 0.0));
    for i in 0..n {
        let x = i as f32;
        path.line_to(point(x + 1.0, 0.0));
        path.cubic_to(point(x + 2.0, 0.0), point(x + 2.0, 1.0), point(x + 2.0, 2.0));
        path.quadratic_to(point(x + 2.0, 3.0), point(x + 1.0, 3.0));
    }
    path.close();

    path
}

fn path_build(bench: &mut Bencher) {
    bench.iter(|| {
        for _ in 0..N {
            let path = star(1_000);
            bencher::black_box(path);
        }
    });
}

fn path_bounds(bench: &mut Bencher) {
    let path = star(10_000);
    bench.iter(|| {
        for _ in 0..N {
            bencher::black_box(path.bounds());
        }
    });
}

fn path_direction(bench: &mut Bencher) {
    let path = star(10_000);
    bench.iter(|| {
        for _ in 0..N {
            let direction = path.direction();
            assert!(direction != Direction::Undefined);
            bencher::black_box(direction);
        }
    });
}

fn path_reverse(bench: &mut Bencher) {
    let mut path = star(10_000);
    bench.iter(|| {
        for _ in 0..N {
            path.reverse();
        }
    });
}

fn path_reversed(bench: &mut Bencher) {
    let path = star(10_000);
    bench.iter(|| {
        for _ in 0..N {
            bencher::black_box(path.reversed());
        }
    });
}

benchmark_group!(build, path_build,);

benchmark_group!(geometry, path_bounds, path_direction, path_reverse, path_reversed,);

benchmark_main!(build, geometry);
