// Hand-authored knowledge base records.
// Editing this file (and restarting the service) is the only way the
// knowledge base changes; nothing here is mutated at runtime.
use super::{TopicKind, TopicRecord};

const KTR_ADDRESS: &str =
    "SRM Nagar, Kattankulathur, Chengalpattu District, Tamil Nadu - 603203";
const KTR_MAP: &str = "https://maps.app.goo.gl/HvLKqGK8TFE5QWLP6";

pub(super) const TOPICS: &[TopicRecord] = &[
    // Campuses
    TopicRecord {
        name: "Kattankulathur Campus",
        kind: TopicKind::Campus,
        description: "The main campus near Chennai, established in 1985, home to \
                      Tech Park, the University Building and the Central Library",
        campus: Some("Chennai"),
        address: Some(KTR_ADDRESS),
        map_link: Some(KTR_MAP),
        established: Some("1985"),
        facilities: &["Tech Park", "University Building", "Central Library"],
        degrees: &[],
        departments: &[],
        contact: None,
        steps: &[],
        steps_note: None,
        aliases: &["kattankulathur", "main campus", "ktr campus"],
    },
    TopicRecord {
        name: "Delhi-NCR Campus",
        kind: TopicKind::Campus,
        description: "Campus in Sonepat serving the Delhi-NCR region, established in 2013",
        campus: Some("Sonepat"),
        address: Some(
            "Delhi-NCR Campus Plot No. 39, Rajiv Gandhi Education City, PS Rai, \
             Sonepat, Haryana - 131029",
        ),
        map_link: None,
        established: Some("2013"),
        facilities: &[],
        degrees: &[],
        departments: &[],
        contact: None,
        steps: &[],
        steps_note: None,
        aliases: &["delhi ncr", "sonepat campus"],
    },
    TopicRecord {
        name: "Amaravati Campus",
        kind: TopicKind::Campus,
        description: "Campus in Andhra Pradesh near Amaravati, established in 2017",
        campus: Some("Andhra Pradesh"),
        address: Some(
            "Neerukonda, Mangalagiri Mandal, Guntur District, Andhra Pradesh - 522502",
        ),
        map_link: None,
        established: Some("2017"),
        facilities: &[],
        degrees: &[],
        departments: &[],
        contact: None,
        steps: &[],
        steps_note: None,
        aliases: &["amaravati"],
    },
    TopicRecord {
        name: "Sikkim Campus",
        kind: TopicKind::Campus,
        description: "Campus in Gangtok, East Sikkim, established in 2019",
        campus: Some("Gangtok"),
        address: Some("5th Mile, Tadong, Gangtok, East Sikkim - 737102"),
        map_link: None,
        established: Some("2019"),
        facilities: &[],
        degrees: &[],
        departments: &[],
        contact: None,
        steps: &[],
        steps_note: None,
        aliases: &["sikkim", "gangtok campus"],
    },
    // Named locations on the main campus
    TopicRecord {
        name: "Tech Park",
        kind: TopicKind::Location,
        description: "A state-of-the-art facility housing research labs and industry \
                      collaboration centers",
        campus: Some("Kattankulathur Campus"),
        address: Some(KTR_ADDRESS),
        map_link: Some(KTR_MAP),
        established: None,
        facilities: &["Research Labs", "Innovation Center", "Industry Collaboration Space"],
        degrees: &[],
        departments: &[],
        contact: None,
        steps: &[],
        steps_note: None,
        aliases: &["techpark"],
    },
    TopicRecord {
        name: "Central Library",
        kind: TopicKind::Location,
        description: "Multi-story library with vast collection of books, journals, and \
                      digital resources",
        campus: Some("Kattankulathur Campus"),
        address: None,
        map_link: Some(KTR_MAP),
        established: None,
        facilities: &["Reading Halls", "Digital Library", "Conference Rooms"],
        degrees: &[],
        departments: &[],
        contact: None,
        steps: &[
            "Visit the library with your student ID",
            "Register at the front desk",
            "Get your library card",
            "Follow borrowing guidelines",
            "Return books on time",
        ],
        steps_note: Some("Library timings: 8:00 AM to 8:00 PM"),
        aliases: &["library"],
    },
    TopicRecord {
        name: "University Building",
        kind: TopicKind::Location,
        description: "Main administrative building housing key offices and departments",
        campus: Some("Kattankulathur Campus"),
        address: None,
        map_link: None,
        established: None,
        facilities: &["Administrative Offices", "Admission Office", "Exam Cell"],
        degrees: &[],
        departments: &[],
        contact: Some("admissions@srmist.edu.in"),
        steps: &[],
        steps_note: None,
        aliases: &["admin block", "admissions office", "admission office"],
    },
    // Program areas
    TopicRecord {
        name: "Engineering",
        kind: TopicKind::Program,
        description: "Engineering programs spanning computing, mechanical, civil, and \
                      electronics disciplines",
        campus: None,
        address: None,
        map_link: None,
        established: None,
        facilities: &[],
        degrees: &["B.Tech", "M.Tech", "Ph.D"],
        departments: &[
            "Computer Science",
            "Mechanical",
            "Civil",
            "Electronics and Communication",
            "Electrical and Electronics",
        ],
        contact: None,
        steps: &[],
        steps_note: None,
        aliases: &["btech", "engineering programs"],
    },
    TopicRecord {
        name: "Medicine",
        kind: TopicKind::Program,
        description: "Medical programs covering general medicine, surgery, and \
                      clinical specialties",
        campus: None,
        address: None,
        map_link: None,
        established: None,
        facilities: &[],
        degrees: &["MBBS", "MD", "MS"],
        departments: &["General Medicine", "Surgery", "Pediatrics", "Orthopedics"],
        contact: None,
        steps: &[],
        steps_note: None,
        aliases: &["mbbs", "medical programs"],
    },
    TopicRecord {
        name: "Management",
        kind: TopicKind::Program,
        description: "Business and management programs across finance, marketing, \
                      human resources, and operations",
        campus: None,
        address: None,
        map_link: None,
        established: None,
        facilities: &[],
        degrees: &["BBA", "MBA", "Ph.D"],
        departments: &["Finance", "Marketing", "Human Resources", "Operations"],
        contact: None,
        steps: &[],
        steps_note: None,
        aliases: &["mba", "business school"],
    },
    TopicRecord {
        name: "Law",
        kind: TopicKind::Program,
        description: "Law programs covering corporate, criminal, and civil law",
        campus: None,
        address: None,
        map_link: None,
        established: None,
        facilities: &[],
        degrees: &["BBA LLB", "LLM"],
        departments: &["Corporate Law", "Criminal Law", "Civil Law"],
        contact: None,
        steps: &[],
        steps_note: None,
        aliases: &["llb", "law school"],
    },
    // Student facilities
    TopicRecord {
        name: "Hostels",
        kind: TopicKind::Facility,
        description: "Separate men's and women's hostels with round-the-clock amenities",
        campus: None,
        address: None,
        map_link: None,
        established: None,
        facilities: &[
            "Men's Hostel",
            "Women's Hostel",
            "Wi-Fi",
            "Gym",
            "Reading Room",
            "Cafeteria",
        ],
        degrees: &[],
        departments: &[],
        contact: Some("hostel.office@srmist.edu.in"),
        steps: &[
            "Submit hostel application",
            "Pay hostel fees",
            "Complete room allocation process",
            "Collect room keys",
            "Complete check-in formalities",
        ],
        steps_note: Some("Contact hostel office for more details"),
        aliases: &["hostel", "accommodation"],
    },
    TopicRecord {
        name: "Sports",
        kind: TopicKind::Facility,
        description: "Indoor and outdoor sports facilities open to all students",
        campus: None,
        address: None,
        map_link: None,
        established: None,
        facilities: &[
            "Badminton",
            "Table Tennis",
            "Chess",
            "Cricket",
            "Football",
            "Basketball",
        ],
        degrees: &[],
        departments: &[],
        contact: None,
        steps: &[],
        steps_note: None,
        aliases: &["sports complex", "gym"],
    },
    TopicRecord {
        name: "Transportation",
        kind: TopicKind::Facility,
        description: "College bus and shuttle services connecting Chennai city and \
                      local areas",
        campus: None,
        address: None,
        map_link: None,
        established: None,
        facilities: &["College Bus", "Shuttle Service"],
        degrees: &[],
        departments: &[],
        contact: None,
        steps: &[],
        steps_note: None,
        aliases: &["bus", "shuttle", "transport"],
    },
];
