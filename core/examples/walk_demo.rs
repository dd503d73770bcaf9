use walkgrid::{GeneratorConfig, generate};

fn main() {
    // 33×33 map, fixed seed, elevation off so only the walk shows
    let config = GeneratorConfig {
        dimension: 33,
        steps: 60,
        elevation: false,
        ..GeneratorConfig::with_seed("demo")
    };
    let map = generate(&config).expect("demo config is valid");

    // Print weights top row first, '.' for unvisited, '9' caps heavy cells
    let dim = map.grid.dimension();
    for y in (0..dim).rev() {
        for x in 0..dim {
            let cell = map.grid.get(x, y);
            let ch = if (x, y) == map.start {
                'S'
            } else if cell.weight == 0 {
                '.'
            } else {
                char::from_digit(cell.weight.min(9), 10).unwrap_or('9')
            };
            print!("{}", ch);
        }
        println!();
    }
    println!(
        "seed {:?}, {} steps, total weight {}",
        map.seed,
        map.path.len(),
        map.grid.total_weight()
    );
}
