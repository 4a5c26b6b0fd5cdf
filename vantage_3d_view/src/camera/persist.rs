/// Fixed-layout binary persistence for camera state.
///
/// The persisted form is 11 consecutive big-endian IEEE-754 32-bit
/// floats: eye, up, look-at (three components each), view-plane
/// distance, zoom. 44 bytes, no header or version tag. The derived
/// basis vectors are never persisted; they are recomputed on load.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use glam::Vec3;

use crate::error::Result;
use super::camera::Camera;

impl Camera {
    /// Encode the persisted fields to `writer`.
    ///
    /// Partial writes are not rolled back: a failure part-way through
    /// leaves the writer holding a truncated record.
    ///
    /// # Errors
    ///
    /// Any write failure is wrapped into [`crate::vantage3d::Error::Io`].
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let eye = self.eye();
        let up = self.up();
        let look_at = self.look_at();

        let fields = [
            eye.x,
            eye.y,
            eye.z,
            up.x,
            up.y,
            up.z,
            look_at.x,
            look_at.y,
            look_at.z,
            self.view_plane_distance(),
            self.zoom(),
        ];

        for value in fields {
            writer.write_all(&value.to_be_bytes())?;
        }

        Ok(())
    }

    /// Decode a camera from `reader`.
    ///
    /// Returns a fresh camera (default allow-all movement policy, no
    /// scene attached) with the persisted fields restored and the basis
    /// recomputed once.
    ///
    /// # Errors
    ///
    /// Any read failure, including a record shorter than 44 bytes, is
    /// wrapped into [`crate::vantage3d::Error::Io`].
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Camera> {
        let mut fields = [0.0f32; 11];
        for value in &mut fields {
            let mut bytes = [0u8; 4];
            reader.read_exact(&mut bytes)?;
            *value = f32::from_be_bytes(bytes);
        }

        let mut camera = Camera::new();
        camera.set_eye(Vec3::new(fields[0], fields[1], fields[2]));
        camera.set_up(Vec3::new(fields[3], fields[4], fields[5]));
        camera.set_look_at(Vec3::new(fields[6], fields[7], fields[8]));
        camera.set_view_plane_distance(fields[9]);
        camera.set_zoom(fields[10]);
        camera.recompute_basis();

        Ok(camera)
    }

    /// Write the persisted fields to a file, creating or truncating it.
    pub fn write_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;

        Ok(())
    }

    /// Read a camera from a file previously produced by
    /// [`Self::write_file`].
    pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Camera> {
        let mut reader = BufReader::new(File::open(path)?);

        Self::read_from(&mut reader)
    }
}

#[cfg(test)]
#[path = "persist_tests.rs"]
mod tests;
