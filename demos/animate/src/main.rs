use heatplate::render::render_field;
use heatplate::{Params, Simulation, Tick};
use image_util::save_rgb;

fn main() {
    const WIDTH: usize = 410;
    const HEIGHT: usize = 310;
    const STEPS_PER_FRAME: usize = 50;

    env_logger::init();

    let params = Params::default();
    let mut sim = Simulation::new(params).unwrap();

    let mut frame = 0;
    'run: loop {
        let snapshot = sim.frame();
        let rgb = render_field(snapshot.field, (snapshot.min, snapshot.max), WIDTH, HEIGHT);
        save_rgb("heat", frame, &rgb, WIDTH, HEIGHT).unwrap();
        frame += 1;

        for _ in 0..STEPS_PER_FRAME {
            if sim.tick() == Tick::Completed {
                break 'run;
            }
        }

        eprint!("\r t = {:.3} / {:.3}", sim.time(), params.total_time);
    }

    eprintln!("\r done after {} frames", frame);
}
