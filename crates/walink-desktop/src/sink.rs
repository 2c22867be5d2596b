use crate::Result;

pub trait ClipboardSink {
    fn sink_name(&self) -> &str;
    fn write_text(&self, text: &str) -> Result<()>;
}
