//! Static copy for the landing page.

use serde::Serialize;

pub const BRAND_PREFIX: &str = "Soul";
pub const BRAND_SUFFIX: &str = "Scribe";

pub const DEFAULT_STUDENT_NAME: &str = "John Doe";
pub const COURSE_NAME: &str = "AI Fundamentals Course";
pub const ISSUE_DATE: &str = "2025-10-26";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    ShieldCheck,
    Lock,
    SearchCheck,
    Wallet,
    Cpu,
    X,
    ChevronDown,
}

pub struct Hero {
    pub headline: &'static str,
    pub headline_accent: &'static str,
    pub lead: &'static str,
    pub issue_label: &'static str,
    pub verify_label: &'static str,
}

pub const HERO: Hero = Hero {
    headline: "Stop Faking It.",
    headline_accent: "Start Scribing It.",
    lead: "Introducing SoulScribe: The Future of Verifiable Credentials. \
           Your achievements, minted as permanent, unforgeable NFTs on the blockchain.",
    issue_label: "Issue a Demo Certificate",
    verify_label: "Verify a Credential",
};

/// Which of the two comparison cards a certificate mockup belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CertificateKind {
    /// Editable PDF; shows whatever name the visitor typed.
    Pdf,
    /// Minted NFT; always shows the original recipient.
    Nft,
}

pub struct ComparisonCard {
    pub kind: CertificateKind,
    pub title: &'static str,
    pub description: &'static str,
    pub date_label: &'static str,
}

pub const COMPARISON_TITLE: &str = "See The Difference";

pub const OLD_WAY: ComparisonCard = ComparisonCard {
    kind: CertificateKind::Pdf,
    title: "The Old Way: The PDF",
    description: "Traditional certificates are just images. Easy to fake, hard to trust.",
    date_label: "Issued",
};

pub const NEW_WAY: ComparisonCard = ComparisonCard {
    kind: CertificateKind::Nft,
    title: "The New Way: SoulScribe NFT",
    description: "Blockchain certificates are immutable, verifiable, and truly owned by you.",
    date_label: "Minted",
};

pub struct AlterDialogCopy {
    pub trigger: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub placeholder: &'static str,
    pub done: &'static str,
    pub impossible: &'static str,
}

pub const ALTER_DIALOG: AlterDialogCopy = AlterDialogCopy {
    trigger: "Alter this Certificate",
    title: "Photoshop Simulator",
    description: "See how easy it is to fake a traditional certificate. Change the name below.",
    placeholder: "Enter a new name",
    done: "Done",
    impossible: "Alter this Certificate (Impossible)",
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CertificateMetadata {
    pub name: &'static str,
    pub student: &'static str,
    pub date: &'static str,
    pub image: &'static str,
}

/// Placeholder on-chain record shown by the verification dialog.
pub struct VerificationRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub trigger: &'static str,
    pub token_id: u64,
    pub contract: &'static str,
    pub owner: &'static str,
    pub metadata: CertificateMetadata,
}

pub const VERIFICATION: VerificationRecord = VerificationRecord {
    title: "✓ Transaction Verified",
    description: "This data is permanently recorded on the blockchain and cannot be altered.",
    trigger: "Verify on-Chain",
    token_id: 721,
    contract: "0x...SoulScribe",
    owner: "0x...JohnDoe",
    metadata: CertificateMetadata {
        name: "AI Fundamentals",
        student: DEFAULT_STUDENT_NAME,
        date: ISSUE_DATE,
        image: "ipfs://QmX...",
    },
};

impl VerificationRecord {
    pub fn metadata_json(&self) -> String {
        serde_json::to_string_pretty(&self.metadata).unwrap_or_else(|e| {
            log::warn!("[content] metadata serialization failed: {}", e);
            String::from("{}")
        })
    }
}

pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub body: &'static str,
}

pub const FEATURES_EYEBROW: &str = "Core Features";
pub const FEATURES_TITLE: &str = "Built for Trust";

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: Icon::Lock,
        title: "Immutable Storage",
        body: "Powered by IPFS, your certificate's image and metadata are stored decentrally. \
               No broken links or deleted files, ever.",
    },
    Feature {
        icon: Icon::SearchCheck,
        title: "Publicly Verifiable",
        body: "Anyone, anywhere, can verify your credential on a public blockchain explorer. \
               True, unforgeable transparency.",
    },
    Feature {
        icon: Icon::Wallet,
        title: "True Ownership",
        body: "The recipient truly owns their achievement. It lives in their personal wallet, \
               not a company's private database.",
    },
];

pub struct Step {
    pub icon: Icon,
    pub title: &'static str,
    pub body: &'static str,
}

pub const STEPS_TITLE: &str = "How It Works";

pub const STEPS: [Step; 3] = [
    Step {
        icon: Icon::Cpu,
        title: "1. Upload & Mint",
        body: "Admin uploads the certificate and recipient's wallet address.",
    },
    Step {
        icon: Icon::Lock,
        title: "2. Secure on IPFS",
        body: "Data is stored on IPFS and an NFT is minted to the blockchain.",
    },
    Step {
        icon: Icon::Wallet,
        title: "3. Receive NFT",
        body: "The recipient receives the verifiable certificate in their Web3 wallet.",
    },
];

pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_TITLE: &str = "Frequently Asked Questions";

pub const FAQ: [FaqItem; 4] = [
    FaqItem {
        question: "What is a \"Soulbound\" token?",
        answer: "A Soulbound Token (SBT) is a type of NFT that is non-transferable. Once it's \
                 minted to a wallet, it cannot be sold or sent to another wallet. This makes it \
                 perfect for personal achievements, like a driver's license or a university \
                 degree, because it's tied to you.",
    },
    FaqItem {
        question: "Why not just use a database?",
        answer: "A private database is a \"black box.\" An employer has to trust that the data \
                 you show them is real and hasn't been tampered with. A blockchain is publicly \
                 verifiable. An employer doesn't have to trust you or us; they can trust the \
                 math of the blockchain itself.",
    },
    FaqItem {
        question: "What is IPFS?",
        answer: "IPFS stands for InterPlanetary File System. Think of it as a decentralized \
                 version of the internet's storage. Instead of a file living on a single server \
                 (like company.com/my-image.jpg), it's identified by its content. This means the \
                 link is permanent and can't be broken or deleted by a single entity.",
    },
    FaqItem {
        question: "What blockchain do you use?",
        answer: "SoulScribe is built to be \"chain-agnostic,\" but we strongly recommend L2 \
                 solutions like Polygon, Arbitrum, or Optimism. These chains offer the same \
                 security as Ethereum but with transaction (minting) fees that cost fractions of \
                 a cent, making it affordable to issue thousands of certificates.",
    },
];

pub struct CallToAction {
    pub title: &'static str,
    pub body: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
}

pub const CTA: CallToAction = CallToAction {
    title: "Ready to Secure Your Legacy?",
    body: "Join the new standard of trust. Whether you're an institution, a boot camp, or an \
           online creator, SoulScribe is ready to power your verifiable credentials.",
    primary: "Start Minting Now",
    secondary: "Contact Sales",
};

pub const CONNECT_WALLET: &str = "Connect Wallet";

pub const FOOTER_LINES: [&str; 2] = [
    "Powered by Rust, WebAssembly, and the HTML canvas.",
    "Making the world a more verifiable place, one block at a time.",
];
