//! TIFF raster decoder

use std::path::Path;

use crate::models::RasterGrid;

/// Decode a single-band TIFF raster
pub(crate) fn decode_tiff<P: AsRef<Path>>(path: P) -> Result<RasterGrid, String> {
    use std::fs::File;
    use std::io::BufReader;
    use tiff::decoder::Limits;
    use tiff::tags::Tag;

    let path = path.as_ref();
    let file = File::open(path).map_err(|e| format!("Failed to open TIFF file: {}", e))?;

    // Raise limits for large landscape rasters (up to 1GB uncompressed)
    let mut limits = Limits::default();
    limits.decoding_buffer_size = 1024 * 1024 * 1024;
    limits.ifd_value_size = 1024 * 1024 * 1024;
    limits.intermediate_buffer_size = 1024 * 1024 * 1024;

    let mut decoder = tiff::decoder::Decoder::new(BufReader::new(file))
        .map_err(|e| format!("Failed to create TIFF decoder: {}", e))?
        .with_limits(limits);

    let (width, height) = decoder
        .dimensions()
        .map_err(|e| format!("Failed to get TIFF dimensions: {}", e))?;

    let color_type = decoder
        .colortype()
        .map_err(|e| format!("Failed to get TIFF color type: {}", e))?;

    // Rank rasters are single-band
    if !matches!(color_type, tiff::ColorType::Gray(_)) {
        return Err(format!(
            "Expected a single-band raster, got color type {:?}",
            color_type
        ));
    }

    // GDAL stores the no-data sentinel as an ASCII tag
    let nodata = decoder
        .get_tag_ascii_string(Tag::GdalNodata)
        .ok()
        .and_then(|raw| parse_nodata_tag(&raw));

    let image_data = decoder
        .read_image()
        .map_err(|e| format!("Failed to read TIFF image data: {}", e))?;

    // Integer samples are normalized to [0.0, 1.0]; float samples are kept
    // as stored
    let data = match image_data {
        tiff::decoder::DecodingResult::U8(buf) => convert_samples(&buf),
        tiff::decoder::DecodingResult::U16(buf) => convert_samples(&buf),
        tiff::decoder::DecodingResult::U32(buf) => convert_samples(&buf),
        tiff::decoder::DecodingResult::U64(buf) => convert_samples(&buf),
        tiff::decoder::DecodingResult::F32(buf) => buf,
        tiff::decoder::DecodingResult::F64(buf) => buf.iter().map(|&v| v as f32).collect(),
        tiff::decoder::DecodingResult::F16(buf) => buf.iter().map(|&v| v.to_f32()).collect(),
        tiff::decoder::DecodingResult::I8(_)
        | tiff::decoder::DecodingResult::I16(_)
        | tiff::decoder::DecodingResult::I32(_)
        | tiff::decoder::DecodingResult::I64(_) => {
            return Err("Signed integer TIFF formats not supported".to_string());
        }
    };

    RasterGrid::from_parts(path.display().to_string(), width, height, data, nodata)
}

/// Parse the GDAL_NODATA tag payload, e.g. "-3.4e+38". The tag is ASCII and
/// may carry a trailing NUL. Non-finite sentinels are ignored; cells holding
/// NaN can never enter a mask anyway.
pub(crate) fn parse_nodata_tag(raw: &str) -> Option<f32> {
    let cleaned = raw.trim_end_matches('\0').trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f32>().ok().filter(|v| v.is_finite())
}

/// Trait for TIFF sample types that can be converted to grid f32 values
trait TiffSample: Copy {
    fn to_grid_f32(self) -> f32;
}

impl TiffSample for u8 {
    #[inline]
    fn to_grid_f32(self) -> f32 {
        self as f32 / 255.0
    }
}

impl TiffSample for u16 {
    #[inline]
    fn to_grid_f32(self) -> f32 {
        self as f32 / 65535.0
    }
}

impl TiffSample for u32 {
    #[inline]
    fn to_grid_f32(self) -> f32 {
        self as f32 / u32::MAX as f32
    }
}

impl TiffSample for u64 {
    #[inline]
    fn to_grid_f32(self) -> f32 {
        self as f32 / u64::MAX as f32
    }
}

fn convert_samples<T: TiffSample>(buf: &[T]) -> Vec<f32> {
    buf.iter().map(|&v| v.to_grid_f32()).collect()
}
