//! Built-in payload used when no `--html-file` is given.

pub const SAMPLE_HTML_TABLE: &str = concat!(
    "<table>",
    "<tr><td><b>Confidence Score</b></td><td>68</td></tr>",
    "<tr><td><b>Confidence Level</b></td><td>Medium</td></tr>",
    "<tr><td><b>Recommended Action</b></td><td>Further Investigation Required</td></tr>",
    "<tr><td><b>Asset Reference</b></td><td>02iKj00001PJJicIAH</td></tr>",
    "<tr><td><b>Condition Summary</b></td><td>The asset has registered multiple claim items ",
    "related to regulator performance, progressing from intermittent issues and fluctuation ",
    "to complete failure and wiring shorts over a period of approximately two months.</td></tr>",
    "<tr><td><b>Risk Assessment</b></td><td>The evidence documents a clear progression of a ",
    "fault related to a component identified as a 'regulator'. The fault escalates from ",
    "intermittent behavior to degradation and culminates in a complete operational failure ",
    "and a wiring short. The operational risk is tied to the loss of function of this ",
    "specific component.</td></tr>",
    "<tr><td><b>Supporting Evidence</b></td><td><pre>",
    "• Claim Item CI-PUNE-002-A described an 'intermittent delay' with the regulator. ",
    "• Claim Item CI-PUNE-002-B described 'performance fluctuation' with the regulator. ",
    "• Claim Item CI-PUNE-003-A noted 'degradation under load' of the regulator. ",
    "• Claim Item CI-PUNE-004-A cited 'regulator motor response failure'. ",
    "• Claim Item CI-PUNE-005-A documented a 'Complete regulator failure under operation'. ",
    "• Claim Item CI-PUNE-005-B documented a 'Regulator wiring short detected'. ",
    "• A Work Order (00000276) has been created with a suggested maintenance date of 2026-02-10.",
    "</pre></td></tr>",
    "</table>",
);
