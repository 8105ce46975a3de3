use std::fmt::{Display, Formatter};
use std::io::{BufWriter, Write};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GffFeature {
    IntergenicPart,
    UTRPart,
    CDSPart,
    IntronPart,
}

impl GffFeature {
    pub fn as_str(self) -> &'static str {
        match self {
            GffFeature::IntergenicPart => "irpart",
            GffFeature::UTRPart => "UTRpart",
            GffFeature::CDSPart => "CDSpart",
            GffFeature::IntronPart => "intronpart",
        }
    }
}

impl Display for GffFeature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GffStrand {
    Forward,
    Reverse,
}

impl GffStrand {
    pub fn other(self) -> GffStrand {
        match self {
            GffStrand::Forward => GffStrand::Reverse,
            GffStrand::Reverse => GffStrand::Forward,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GffStrand::Forward => "+",
            GffStrand::Reverse => "-",
        }
    }
}

/*

1	sequence	The name of the sequence where the feature is located.
2	source	Keyword identifying the source of the feature, like a program (e.g. Augustus or RepeatMasker) or an organization (like TAIR).
3	feature	The feature type name. For hints, one of irpart, UTRpart, CDSpart or intronpart.
4	start	Genomic start of the feature, with a 1-base offset. This is in contrast with other 0-offset half-open sequence formats, like BED.
5	end	Genomic end of the feature, with a 1-base offset. This is the same end coordinate as it is in 0-offset half-open sequence formats, like BED.
6	score	Numeric value that generally indicates the confidence of the source in the annotated feature. A value of "." (a dot) is used to define a null value.
7	strand	Single character that indicates the strand of the feature; it can assume the values of "+" (positive, or 5'->3'), "-", (negative, or 3'->5'), "." (undetermined).
8	phase	phase of CDS features; it can be either one of 0, 1, 2 (for CDS features) or "." (for everything else). Always "." for hints.
9	attributes	All the other information pertaining to this feature. Augustus matches hints to extrinsic.cfg through the source= attribute.

 */

#[derive(Clone, Debug, PartialEq)]
pub struct GffRecord {
    sequence: String,
    source: String,
    feature: GffFeature,
    start: u64,
    end: u64,
    score: Option<f32>,
    strand: Option<GffStrand>,
    attributes: String,
}

impl GffRecord {
    pub fn new(
        sequence: String,
        source: String,
        feature: GffFeature,
        start: u64,
        end: u64,
        score: Option<f32>,
        strand: Option<GffStrand>,
        attributes: String,
    ) -> GffRecord {
        GffRecord {
            sequence,
            source,
            feature,
            start,
            end,
            score,
            strand,
            attributes,
        }
    }

    pub fn swap_strand(&mut self, len: u64) {
        let start = self.start;
        let end = self.end;

        self.end = 1 + len - start;
        self.start = 1 + len - end;

        if let Some(strand) = self.strand {
            self.strand = Some(strand.other())
        };
    }

    pub fn get_sequence(&self) -> &String {
        &self.sequence
    }

    pub fn get_source(&self) -> &String {
        &self.source
    }

    pub fn get_feature(&self) -> GffFeature {
        self.feature
    }

    pub fn get_start(&self) -> u64 {
        self.start
    }

    pub fn get_end(&self) -> u64 {
        self.end
    }

    pub fn get_score(&self) -> Option<f32> {
        self.score
    }

    pub fn get_strand(&self) -> Option<GffStrand> {
        self.strand
    }

    pub fn get_attributes(&self) -> &String {
        &self.attributes
    }
}

pub struct GffWriter<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> GffWriter<W> {
    pub fn new(writer: BufWriter<W>) -> GffWriter<W> {
        GffWriter { writer }
    }

    pub fn write_record(&mut self, rec: &GffRecord) -> std::io::Result<()> {
        let score = rec.score.map_or(".".to_owned(), |v| format!("{}", v));
        let strand = rec.strand.map_or(".", |v| v.as_str());
        let phase = "."; // Hints carry no phase

        writeln!(
            self.writer,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            rec.sequence,
            rec.source,
            rec.feature,
            rec.start,
            rec.end,
            score,
            strand,
            phase,
            rec.attributes
        )
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> std::io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}

#[cfg(test)]
mod tests {
    use crate::gff::{GffFeature, GffRecord, GffStrand, GffWriter};
    use std::io::BufWriter;

    fn hint_record(start: u64, end: u64, strand: GffStrand) -> GffRecord {
        GffRecord::new(
            "chr1".to_owned(),
            "Helixer".to_owned(),
            GffFeature::IntronPart,
            start,
            end,
            Some(0.75),
            Some(strand),
            "source=H".to_owned(),
        )
    }

    #[test]
    fn test_write_hint_line()
    {
        let mut writer = GffWriter::new(BufWriter::new(Vec::new()));
        writer.write_record(&hint_record(6, 25, GffStrand::Reverse)).unwrap();

        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(out, "chr1\tHelixer\tintronpart\t6\t25\t0.75\t-\t.\tsource=H\n");
    }

    #[test]
    fn test_swap_strand()
    {
        let mut rec = hint_record(6, 25, GffStrand::Forward);
        rec.swap_strand(30);

        assert_eq!((rec.get_start(), rec.get_end()), (6, 25));
        assert_eq!(rec.get_strand(), Some(GffStrand::Reverse));
    }
}
