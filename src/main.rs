use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use itertools::{iproduct, Itertools};
use ndarray::{s, Array1};

use rspt2spectra::rspt::hybridization::{hyb, HybParams, Hybridization};
use rspt2spectra::rspt::pdos::pdos;
use rspt2spectra::rspt::self_energy::{self_energy, SelfEnergyParams};

/// Inspects spectral quantities reconstructed from RSPt output files.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Summarises hybridization functions.
    Hyb {
        /// File holding the real parts of the diagonal hybridization
        /// functions.
        file_re: PathBuf,

        /// File holding the imaginary parts of the diagonal hybridization
        /// functions.
        file_im: PathBuf,

        /// Number of non-equivalent correlated orbitals.
        #[arg(short, long)]
        norb: usize,

        /// Treat the calculation as spin-polarised.
        #[arg(short, long)]
        spinpol: bool,

        /// File holding the real parts of the off-diagonal hybridization
        /// functions.
        #[arg(long)]
        file_re_off: Option<PathBuf>,

        /// File holding the imaginary parts of the off-diagonal hybridization
        /// functions.
        #[arg(long)]
        file_im_off: Option<PathBuf>,

        /// RSPt out-file holding the off-diagonal element mask.
        #[arg(long)]
        outfile: Option<PathBuf>,
    },

    /// Summarises diagonal self-energies.
    SelfEnergy {
        /// File holding the real parts of the diagonal self-energies.
        file_re: PathBuf,

        /// File holding the imaginary parts of the diagonal self-energies.
        file_im: PathBuf,

        /// Treat the calculation as spin-polarised.
        #[arg(short, long)]
        spinpol: bool,
    },

    /// Summarises a projected density of states.
    Pdos {
        /// File holding the projected density of states.
        file: PathBuf,

        /// Number of non-equivalent correlated orbitals.
        #[arg(short, long)]
        norb: usize,

        /// Treat the calculation as spin-polarised.
        #[arg(short, long)]
        spinpol: bool,
    },
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Hyb {
            file_re,
            file_im,
            norb,
            spinpol,
            file_re_off,
            file_im_off,
            outfile,
        } => {
            let params = HybParams::builder()
                .file_re(file_re)
                .file_im(file_im)
                .norb(norb)
                .spinpol(spinpol)
                .file_re_off(file_re_off)
                .file_im_off(file_im_off)
                .outfile(outfile)
                .build()
                .context("invalid hybridization parameters")?;
            let (w, h) = hyb(&params)?;
            print_mesh(&w);
            match h {
                Hybridization::Diagonal(h) => {
                    println!(
                        "Diagonal hybridization functions for {} spin-orbitals.",
                        h.nrows()
                    );
                }
                Hybridization::Full(h) => {
                    let nc = h.shape()[0];
                    let filled = iproduct!(0..nc, 0..nc)
                        .filter(|&(i, j)| {
                            i != j && h.slice(s![i, j, ..]).iter().any(|v| v.norm() > 0.0)
                        })
                        .map(|(i, j)| format!("({i},{j})"))
                        .join(", ");
                    println!("Full hybridization matrix for {nc} spin-orbitals.");
                    if filled.is_empty() {
                        println!("No off-diagonal functions are non-zero.");
                    } else {
                        println!("Non-zero off-diagonal functions: {filled}.");
                    }
                }
            }
        }
        Command::SelfEnergy {
            file_re,
            file_im,
            spinpol,
        } => {
            let params = SelfEnergyParams::builder()
                .file_re(file_re)
                .file_im(file_im)
                .spinpol(spinpol)
                .build()
                .context("invalid self-energy parameters")?;
            let (w, sig) = self_energy(&params)?;
            print_mesh(&w);
            println!("Diagonal self-energies for {} spin-orbitals.", sig.nrows());
        }
        Command::Pdos {
            file,
            norb,
            spinpol,
        } => {
            let (w, p) = pdos(file, norb, spinpol)?;
            print_mesh(&w);
            println!("Projected density of states for {} spin-orbitals.", p.nrows());
        }
    }
    Ok(())
}

fn print_mesh(w: &Array1<f64>) {
    if let (Some(first), Some(last)) = (w.first(), w.last()) {
        println!(
            "Energy mesh: {} points from {first:.6} to {last:.6} eV.",
            w.len()
        );
    }
}
