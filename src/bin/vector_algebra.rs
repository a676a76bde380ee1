use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::bail;
    use approx::relative_eq;
    use clap::{Parser, Subcommand};
    use log::{debug, info, warn};
    use vector_algebra::{Decomposition, InnerProductSpace, Vector3, random::VectorRng};

    #[derive(Debug, Parser)]
    #[command(about = "Vector projection and rejection", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Project vector `a` onto vector `b`
        Project {
            /// Vector to project, as `x,y,z`
            #[arg(allow_hyphen_values = true, value_parser = parse_vector3)]
            a: Vector3,

            /// Vector to project onto, as `x,y,z`
            #[arg(allow_hyphen_values = true, value_parser = parse_vector3)]
            b: Vector3,
        },
        /// Reject vector `a` from vector `b`
        Reject {
            /// Vector to reject, as `x,y,z`
            #[arg(allow_hyphen_values = true, value_parser = parse_vector3)]
            a: Vector3,

            /// Vector to reject from, as `x,y,z`
            #[arg(allow_hyphen_values = true, value_parser = parse_vector3)]
            b: Vector3,
        },
        /// Demonstrate projection and rejection on random vectors
        Demo {
            /// Seed for the random vectors (seeded from the OS if omitted)
            #[arg(short, long)]
            seed: Option<u64>,
        },
    }

    pub fn main() -> Result<()> {
        init_logging()?;

        let cli = Cli::parse();

        match cli.command {
            Command::Project { a, b } => {
                warn_if_zero_axis(&b);
                println!("proj_b(a) = {}", a.project_onto(&b));
                Ok(())
            }
            Command::Reject { a, b } => {
                warn_if_zero_axis(&b);
                println!("rej_b(a) = {}", a.reject_from(&b));
                Ok(())
            }
            Command::Demo { seed } => {
                let mut rng = match seed {
                    Some(seed) => {
                        info!("Seeding random vectors with {seed}");
                        VectorRng::from_seed(seed)
                    }
                    None => {
                        info!("Seeding random vectors from OS entropy");
                        VectorRng::from_entropy()
                    }
                };
                demonstrate_projection(&mut rng);
                demonstrate_decomposition(&mut rng)
            }
        }
    }

    fn init_logging() -> Result<()> {
        env_logger::init();
        Ok(())
    }

    fn parse_vector3(value: &str) -> Result<Vector3, String> {
        let components = value
            .split(',')
            .map(|component| component.trim().parse::<f32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| format!("invalid vector component: {err}"))?;

        let &[x, y, z] = components.as_slice() else {
            return Err(format!(
                "expected 3 comma-separated components, got {}",
                components.len()
            ));
        };
        Ok(Vector3::new(x, y, z))
    }

    fn warn_if_zero_axis(axis: &Vector3) {
        if axis.norm_squared() == 0.0 {
            warn!("Axis {axis} has zero length, result will be non-finite");
        }
    }

    fn demonstrate_projection(rng: &mut VectorRng) {
        // Projection is not commutative
        let a = rng.random_vector3(-10.0, 10.0);
        let b = rng.random_vector3(-10.0, 10.0);
        println!(
            "a = {a}, b = {b}\nproj_b(a) = {}\nproj_a(b) = {}",
            a.project_onto(&b),
            b.project_onto(&a)
        );

        // A cart on a track along the x-axis only feels the part of a push
        // that lies along the track
        let push_force = rng.random_vector3(-5.0, 5.0);
        let track_direction = Vector3::unit_x();
        println!(
            "Fpush: {push_force}\nF = proj_d(Fpush) = {}",
            push_force.project_onto(&track_direction)
        );
    }

    fn demonstrate_decomposition(rng: &mut VectorRng) -> Result<()> {
        let a = rng.random_vector3(0.0, 1.0);
        let b = rng.random_vector3(0.0, 1.0);

        let Decomposition {
            parallel,
            perpendicular,
        } = Decomposition::of(&a, &b);
        let recombined = parallel + perpendicular;

        debug!("Perpendicular part has dot product {} with b", perpendicular.dot(&b));

        if recombined == a {
            println!(
                "a = {a}, b = {b}\naParallel = {parallel}, aPerp = {perpendicular}\nHence {parallel} + {perpendicular} = {a}"
            );
        } else if relative_eq!(recombined, a, epsilon = 1e-6) {
            warn!("Recombined vector {recombined} differs from {a} by rounding");
            println!(
                "a = {a}, b = {b}\naParallel = {parallel}, aPerp = {perpendicular}\nHence {parallel} + {perpendicular} ≈ {a}"
            );
        } else {
            bail!("Decomposition of {a} along {b} recombines to {recombined}");
        }
        Ok(())
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
