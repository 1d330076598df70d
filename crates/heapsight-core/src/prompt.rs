//! Fixed analysis instructions
//!
//! The prompt is part of the output contract: the extractor relies on the
//! model returning a single HTML document. Bump [`PROMPT_VERSION`] whenever
//! the text changes.

/// Version of the instruction text below
pub const PROMPT_VERSION: &str = "1";

/// Title used for both `<title>` and the page header
pub const REPORT_TITLE: &str = "基于AI自动化生成 Java应用OOM问题深度分析报告";

/// Disclaimer placed in a `<p>` directly under the header
pub const REPORT_DISCLAIMER: &str = "本回答由AI生成，内容仅供参考，请仔细甄别。";

const ANALYSIS_PROMPT: &str = "
The documents above are heap snapshot reports exported by the Eclipse Memory Analyzer (MAT) \
from a Java application that ran out of memory. Act as a senior Java engineer with deep \
knowledge of the JVM and determine the main cause of the OutOfMemoryError.

Return the result as one self-contained HTML document with CSS styling. A small amount of \
simple <script> is allowed. The document must declare the UTF-8 character set. Output only \
the HTML document, starting with <!DOCTYPE html> and ending with </html>, with no text \
before or after it. Write all report text in Simplified Chinese.

The report must contain the following sections:
1. Root cause analysis
2. Heap occupancy distribution
3. Object reference chain analysis
4. The operation chain that led to the OOM
5. Stack trace at the time of the OOM
6. Memory leak pattern identification
7. GC behavior analysis
8. Object lifecycle anomaly detection
9. Suspect code module localization
10. Highlight key terms
11. Solutions and optimization recommendations
12. Use this text for both the <title> and the header: 基于AI自动化生成 Java应用OOM问题深度分析报告
13. Directly under the header add a <p> containing: 本回答由AI生成，内容仅供参考，请仔细甄别。
";

/// Get the analysis instructions appended after the corpus
pub fn analysis_prompt() -> &'static str {
    ANALYSIS_PROMPT
}
