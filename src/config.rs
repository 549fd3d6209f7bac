//! Command line configuration

use crate::render::{MountPoints, DATA_ATTRIBUTE, DATA_ELEMENT, RENDER_TARGET};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Chart backend selected on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendKind {
    /// Standalone HTML page drawn by plotly.js
    Html,
    /// Static PNG image
    Png,
    /// Native window
    Window,
}

impl BackendKind {
    pub fn default_output(self) -> Option<PathBuf> {
        match self {
            BackendKind::Html => Some(PathBuf::from("hist_graph.html")),
            BackendKind::Png => Some(PathBuf::from("hist_graph.png")),
            BackendKind::Window => None,
        }
    }
}

/// RGB histogram viewer
#[derive(Parser, Clone, Debug)]
#[command(name = "hist-graph")]
#[command(about = "Compute an image's RGB histogram and draw the channel curves")]
pub struct Config {
    /// Image file name inside the image folder
    #[arg(required_unless_present_any = ["payload", "list"], conflicts_with = "payload")]
    pub image_id: Option<String>,

    /// Folder holding the images
    #[arg(long, default_value = "images")]
    pub image_folder: PathBuf,

    /// Render this JSON payload instead of computing one from an image
    #[arg(long)]
    pub payload: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "html")]
    pub backend: BackendKind,

    /// Output file (html and png backends)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Open the output with the system default application
    #[arg(long)]
    pub open: bool,

    /// List the images in the image folder and exit
    #[arg(long)]
    pub list: bool,

    /// Id of the element carrying the payload
    #[arg(long, default_value = DATA_ELEMENT)]
    pub data_element: String,

    /// Attribute holding the JSON payload
    #[arg(long, default_value = DATA_ATTRIBUTE)]
    pub data_attribute: String,

    /// Id of the element the chart is drawn into
    #[arg(long, default_value = RENDER_TARGET)]
    pub mount: String,
}

impl Config {
    pub fn mount_points(&self) -> MountPoints {
        MountPoints {
            data_element: self.data_element.clone(),
            data_attribute: self.data_attribute.clone(),
            render_target: self.mount.clone(),
        }
    }

    pub fn output_path(&self) -> Option<PathBuf> {
        self.output
            .clone()
            .or_else(|| self.backend.default_output())
    }
}
