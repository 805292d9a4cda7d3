// THEORY:
// The `Pixel` module is the most fundamental unit of the detection system. It is
// a "dumb" data container for a single RGBA sample. It holds no knowledge of its
// neighbors in space; anything that needs another pixel (medians, gradients,
// projections) belongs in the stage modules that sweep whole grids.
//
// Key architectural principles:
// 1.  **Raw Channels Only**: Four bytes, nothing derived. The pipeline works in
//     plain 8-bit intensity space, so there is no reason to carry normalized or
//     linearized forms alongside the raw values.
// 2.  **Single-Channel Convention**: Every stage after luma extraction produces
//     grids where R=G=B. `intensity()` reads the red channel as the canonical
//     one, mirroring how the projection reads edge magnitude back out of a
//     grayscale sample.
// 3.  **Byte-Slice Interop**: Decoded images arrive as flat RGBA byte buffers;
//     `From<&[Byte]>` is the one conversion seam between those buffers and the
//     typed grid world.

pub mod pixel {
    pub type Byte = u8;
    pub type Bytes = Vec<Byte>;
    pub type Channel = Byte;

    const CHANNELS: usize = 4;

    /// A "dumb" data container representing a single RGBA pixel.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Pixel {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
        /// The alpha (transparency) channel value (0-255).
        pub alpha: Channel,
    }

    impl Pixel {
        pub fn new(red: Channel, green: Channel, blue: Channel, alpha: Channel) -> Self {
            Pixel {
                red,
                green,
                blue,
                alpha,
            }
        }

        /// Builds an opaque single-channel sample (R=G=B, alpha 255).
        /// Derived grids use this so their snapshots encode to visible images.
        pub fn gray(intensity: Channel) -> Self {
            Pixel::new(intensity, intensity, intensity, 255)
        }

        /// Reads the intensity of a single-channel sample.
        /// Single-channel grids store the same value in all three color
        /// channels; red is read as the canonical one.
        pub fn intensity(&self) -> Channel {
            self.red
        }
    }

    impl From<&[Byte]> for Pixel {
        fn from(bytes: &[Byte]) -> Self {
            if bytes.len() != CHANNELS {
                panic!("Cannot convert {} bytes into pixel.", bytes.len());
            }
            Pixel::new(bytes[0], bytes[1], bytes[2], bytes[3])
        }
    }

    impl From<Pixel> for Bytes {
        fn from(pixel: Pixel) -> Self {
            vec![pixel.red, pixel.green, pixel.blue, pixel.alpha]
        }
    }
}
