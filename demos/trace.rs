//! Sweeps a balanced three-phase current through every transform and records
//! each stage into `trace.mcap` as CBOR messages.

use std::{
    collections::BTreeMap,
    f64::consts::TAU,
    fs::File,
    io::BufWriter,
    sync::Arc,
};

use anyhow::Context as _;
use clarke_park::park_clarke::{self, SinCos, ThreePhaseStationaryReferenceFrame};
use serde::Serialize;

#[derive(Serialize)]
struct Sample {
    time_ns: u64,
    angle_rad: f64,
    phases: [f64; 3],
    alpha_beta: [f64; 2],
    d_q: [f64; 2],
    unit_d_q: Option<[f64; 2]>,
    reconstructed_phases: [f64; 3],
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();

    let path = "trace.mcap";
    let mut writer = mcap::Writer::new(BufWriter::new(
        File::create(path).with_context(|| format!("creating {path}"))?,
    ))?;
    let channel = mcap::Channel {
        topic: String::from("clarke_park"),
        schema: Some(Arc::new(mcap::Schema {
            name: "".to_owned(),
            encoding: "".to_owned(),
            data: std::borrow::Cow::default(),
        })),
        message_encoding: "cbor".to_owned(),
        metadata: BTreeMap::default(),
    };
    let channel_id = writer.add_channel(&channel)?;

    let mut time_ns = 0;
    let dt_ns = 1_000_000;
    let mut angle_rad: f64 = 0.;
    let velocity_rad_per_sec = 2.;
    let amplitude = 1.5;
    let mut worst_error: f64 = 0.;
    let mut sequence = 0;

    while time_ns <= 10_000_000_000 {
        let angle_rad_norm = angle_rad % TAU;

        // A fifth harmonic on top of the fundamental shows up as ripple in d/q.
        let phase = |offset: f64| {
            amplitude * (angle_rad_norm - offset).cos()
                + 0.1 * amplitude * (5. * (angle_rad_norm - offset)).cos()
        };
        let phases = ThreePhaseStationaryReferenceFrame {
            a: phase(0.),
            b: phase(TAU / 3.),
            c: phase(2. * TAU / 3.),
        };

        let sin_cos = SinCos::new(angle_rad_norm);
        let alpha_beta = park_clarke::clarke(phases);
        let d_q = park_clarke::park_sin_cos(sin_cos, alpha_beta);
        let reconstructed =
            park_clarke::inverse_clarke(park_clarke::inverse_park_sin_cos(sin_cos, d_q));

        for (original, reconstructed) in [
            (phases.a, reconstructed.a),
            (phases.b, reconstructed.b),
            (phases.c, reconstructed.c),
        ] {
            worst_error = worst_error.max((original - reconstructed).abs());
        }

        let mut buffer = Vec::with_capacity(256);
        ciborium::into_writer(
            &Sample {
                time_ns,
                angle_rad: angle_rad_norm,
                phases: phases.into(),
                alpha_beta: alpha_beta.into(),
                d_q: d_q.into(),
                unit_d_q: clarke_park::normalized(<[f64; 2]>::from(d_q)).ok(),
                reconstructed_phases: reconstructed.into(),
            },
            &mut buffer,
        )
        .map_err(|err| anyhow::anyhow!("encoding sample {sequence}: {err:?}"))?;
        writer.write_to_known_channel(
            &mcap::records::MessageHeader {
                channel_id,
                sequence,
                log_time: time_ns,
                publish_time: time_ns,
            },
            &buffer,
        )?;

        angle_rad += velocity_rad_per_sec * (dt_ns as f64 / 1e9);
        time_ns += dt_ns;
        sequence += 1;
    }

    writer.finish()?;

    log::info!("wrote {sequence} samples to {path}, worst reconstruction error {worst_error:e}");

    Ok(())
}
