#![warn(clippy::pedantic)]

use std::fmt::{Display, Formatter};
use std::time::Duration;

use clap::Parser;
use log::info;
use m3d::math::matrix::Matrix4f;
use m3d::math::vector::{vec2, vec3, vec4, Vec2, Vec3, Vec4};
use rand::rngs::StdRng;
use rand::SeedableRng;

use harness::{sum_matrix, Harness, Inputs};

mod harness;

#[derive(Parser, Debug)]
#[command(name = "m3d-bench")]
#[command(about = "Times every m3d vector and matrix operation on random inputs")]
struct Config {
    /// Accepted samples per operation
    #[arg(short, long, default_value_t = 1000)]
    samples: u32,

    /// Samples slower than this many nanoseconds are discarded
    #[arg(short, long, default_value_t = 10_000)]
    outlier_threshold: u64,

    /// Seed for the input generator, random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug)]
pub enum BenchError {
    NoSamplesRequested,
    TooManyOutliers { operation: &'static str },
}

impl Display for BenchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BenchError::NoSamplesRequested => write!(f, "at least one sample is required"),
            BenchError::TooManyOutliers { operation } => {
                write!(f, "{operation}: every sample exceeded the outlier threshold")
            }
        }
    }
}

impl std::error::Error for BenchError {}

fn main() -> Result<(), BenchError> {
    env_logger::init();
    let config = Config::parse();
    if config.samples == 0 {
        return Err(BenchError::NoSamplesRequested);
    }
    info!("Benchmark configuration: {config:?}");

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut harness = Harness::new(
        rng,
        config.samples,
        Duration::from_nanos(config.outlier_threshold),
    );

    println!("\n=== Running m3d Benchmark Suite ===\n");
    run_vec2(&mut harness)?;
    run_vec3(&mut harness)?;
    run_vec4(&mut harness)?;
    run_mat4(&mut harness)?;
    println!("\nGarbage out: {}\n", harness.sink());
    Ok(())
}

fn sum2(v: &Vec2) -> f32 {
    v.x + v.y
}

fn sum3(v: &Vec3) -> f32 {
    v.x + v.y + v.z
}

fn sum4(v: &Vec4) -> f32 {
    v.x + v.y + v.z + v.w
}

fn run_vec2(harness: &mut Harness) -> Result<(), BenchError> {
    let pair = |rng: &Inputs| (vec2(rng[0], rng[1]), vec2(rng[2], rng[3]));
    let scaled = |rng: &Inputs| (vec2(rng[0], rng[1]), rng[2]);

    harness.run("Vec2 negation", pair, |(a, _)| -a, sum2)?;
    harness.run("Vec2 subtraction", pair, |(a, b)| b - a, sum2)?;
    harness.run("Vec2 addition", pair, |(a, b)| b + a, sum2)?;
    harness.run("Vec2 scalar multiplication", scaled, |(a, s)| s * a, sum2)?;
    harness.run("Vec2 scalar division", scaled, |(a, s)| a / s, sum2)?;
    harness.run("Vec2 hadamard product", pair, |(a, b)| a.hadamard(&b), sum2)?;
    harness.run("Vec2 dot product", pair, |(a, b)| a.dot(&b), |d| *d)?;
    harness.run("Vec2 length squared", pair, |(a, _)| a.length_squared(), |l| *l)?;
    harness.run("Vec2 length", pair, |(a, _)| a.length(), |l| *l)?;
    harness.run("Vec2 normalize", pair, |(a, _)| a.normalized(), sum2)?;
    Ok(())
}

fn run_vec3(harness: &mut Harness) -> Result<(), BenchError> {
    let pair = |rng: &Inputs| {
        (
            vec3(rng[0], rng[1], rng[2]),
            vec3(rng[3], rng[4], rng[5]),
        )
    };
    let scaled = |rng: &Inputs| (vec3(rng[0], rng[1], rng[2]), rng[3]);

    harness.run("Vec3 negation", pair, |(a, _)| -a, sum3)?;
    harness.run("Vec3 subtraction", pair, |(a, b)| b - a, sum3)?;
    harness.run("Vec3 addition", pair, |(a, b)| b + a, sum3)?;
    harness.run("Vec3 scalar multiplication", scaled, |(a, s)| s * a, sum3)?;
    harness.run("Vec3 scalar division", scaled, |(a, s)| a / s, sum3)?;
    harness.run("Vec3 hadamard product", pair, |(a, b)| a.hadamard(&b), sum3)?;
    harness.run("Vec3 dot product", pair, |(a, b)| a.dot(&b), |d| *d)?;
    harness.run("Vec3 cross product", pair, |(a, b)| a.cross(&b), sum3)?;
    harness.run("Vec3 length squared", pair, |(a, _)| a.length_squared(), |l| *l)?;
    harness.run("Vec3 length", pair, |(a, _)| a.length(), |l| *l)?;
    harness.run("Vec3 normalize", pair, |(a, _)| a.normalized(), sum3)?;
    Ok(())
}

fn run_vec4(harness: &mut Harness) -> Result<(), BenchError> {
    let pair = |rng: &Inputs| {
        (
            vec4(rng[0], rng[1], rng[2], rng[3]),
            vec4(rng[4], rng[5], rng[6], rng[7]),
        )
    };
    let scaled = |rng: &Inputs| (vec4(rng[0], rng[1], rng[2], rng[3]), rng[4]);

    harness.run("Vec4 negation", pair, |(a, _)| -a, sum4)?;
    harness.run("Vec4 subtraction", pair, |(a, b)| b - a, sum4)?;
    harness.run("Vec4 addition", pair, |(a, b)| b + a, sum4)?;
    harness.run("Vec4 scalar multiplication", scaled, |(a, s)| s * a, sum4)?;
    harness.run("Vec4 scalar division", scaled, |(a, s)| a / s, sum4)?;
    harness.run("Vec4 hadamard product", pair, |(a, b)| a.hadamard(&b), sum4)?;
    harness.run("Vec4 dot product", pair, |(a, b)| a.dot(&b), |d| *d)?;
    harness.run("Vec4 length squared", pair, |(a, _)| a.length_squared(), |l| *l)?;
    harness.run("Vec4 length", pair, |(a, _)| a.length(), |l| *l)?;
    harness.run("Vec4 normalize", pair, |(a, _)| a.normalized(), sum4)?;
    harness.run("Vec4 xyz swizzle", pair, |(a, _)| a.xyz(), sum3)?;
    Ok(())
}

fn run_mat4(harness: &mut Harness) -> Result<(), BenchError> {
    let six = |rng: &Inputs| [rng[0], rng[1], rng[2], rng[3], rng[4], rng[5]];
    let scale_and_translation = |rng: &Inputs| {
        (
            Matrix4f::new_scale(&vec3(rng[0], rng[1], rng[2])),
            Matrix4f::new_translation(&vec3(rng[3], rng[4], rng[5])),
        )
    };

    harness.run(
        "Mat4 orthographic",
        six,
        |[l, r, t, b, n, f]| Matrix4f::new_orthographic(l, r, t, b, n, f),
        sum_matrix,
    )?;
    harness.run(
        "Mat4 frustum",
        six,
        |[l, r, t, b, n, f]| Matrix4f::new_frustum(l, r, t, b, n, f),
        sum_matrix,
    )?;
    harness.run(
        "Mat4 perspective",
        six,
        |[fov, aspect, n, f, _, _]| Matrix4f::new_perspective(fov, aspect, n, f),
        sum_matrix,
    )?;
    harness.run(
        "Mat4 translate",
        |rng| vec3(rng[0], rng[1], rng[2]),
        |offset| Matrix4f::new_translation(&offset),
        sum_matrix,
    )?;
    harness.run(
        "Mat4 rotation",
        |rng| rng[0],
        |angle| Matrix4f::new_rotation(angle, &vec3(0.0, 0.0, 1.0)),
        sum_matrix,
    )?;
    harness.run(
        "Mat4 scale",
        |rng| vec3(rng[0], rng[1], rng[2]),
        |factors| Matrix4f::new_scale(&factors),
        sum_matrix,
    )?;
    harness.run(
        "Mat4 inverse",
        |rng| Matrix4f::new_translation(&vec3(rng[0], rng[1], rng[2])),
        |m| m.try_inverse().unwrap_or(m),
        sum_matrix,
    )?;
    harness.run("Mat4 addition", scale_and_translation, |(a, b)| b + a, sum_matrix)?;
    harness.run("Mat4 multiplication", scale_and_translation, |(a, b)| b * a, sum_matrix)?;
    harness.run(
        "Mat4 Vec4 multiplication",
        |rng| {
            (
                vec4(rng[0], rng[1], rng[2], rng[3]),
                Matrix4f::new_translation(&vec3(rng[4], rng[5], rng[6])),
            )
        },
        |(a, m)| m * a,
        sum4,
    )?;
    Ok(())
}
